pub mod market;

pub use market::{Market, contracts_on_chain};
