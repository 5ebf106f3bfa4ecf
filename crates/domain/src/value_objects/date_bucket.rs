//! UTC calendar-day buckets.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use std::fmt;

/// Number of seconds in one UTC day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A UTC calendar date used as the unit of daily aggregation.
///
/// Renders as `YYYY-M-D` with month and day unpadded (`2024-1-5`), which is
/// the key format used by the indexer's volume endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateBucket(NaiveDate);

impl DateBucket {
    /// Returns the bucket containing the given unix timestamp (seconds).
    ///
    /// # Errors
    /// Returns [`DomainError::TimestampOutOfRange`] if the timestamp cannot
    /// be represented as a calendar date.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, DomainError> {
        DateTime::from_timestamp(timestamp, 0)
            .map(|datetime| Self(datetime.date_naive()))
            .ok_or(DomainError::TimestampOutOfRange(timestamp))
    }

    /// Creates a bucket from a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Unix timestamp of midnight UTC at the start of this day.
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// The bucket for the day before this one.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The bucket for the day after this one.
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.0.year(), self.0.month(), self.0.day())
    }
}
