pub mod date_bucket;
pub mod window;

pub use date_bucket::{DateBucket, SECONDS_PER_DAY};
pub use window::{DayWindow, TimeRange};
