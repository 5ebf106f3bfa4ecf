//! The completed-day reporting window and query time ranges.

use crate::error::DomainError;
use crate::value_objects::date_bucket::DateBucket;

/// The most recent completed UTC day relative to a timestamp.
///
/// For a timestamp `T` the window is `[start of previous day, start of
/// current day)`: the day that finished at the midnight preceding `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    previous: DateBucket,
    current: DateBucket,
}

impl DayWindow {
    /// Builds the window that ends at the start of the UTC day containing
    /// `timestamp`.
    ///
    /// # Errors
    /// Returns [`DomainError::TimestampOutOfRange`] if either day cannot be
    /// represented.
    pub fn ending_before(timestamp: i64) -> Result<Self, DomainError> {
        let current = DateBucket::from_timestamp(timestamp)?;
        let previous = current
            .previous()
            .ok_or(DomainError::TimestampOutOfRange(timestamp))?;
        Ok(Self { previous, current })
    }

    /// The completed day covered by the window.
    #[must_use]
    pub fn previous_day(&self) -> DateBucket {
        self.previous
    }

    /// The day in progress at the window's end boundary.
    #[must_use]
    pub fn current_day(&self) -> DateBucket {
        self.current
    }

    /// Inclusive start of the window (midnight UTC of the previous day).
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        self.previous.start_timestamp()
    }

    /// Exclusive end of the window (midnight UTC of the current day).
    #[must_use]
    pub fn end_timestamp(&self) -> i64 {
        self.current.start_timestamp()
    }

    /// Range covering just the completed day.
    #[must_use]
    pub fn daily_range(&self) -> TimeRange {
        TimeRange::between(self.start_timestamp(), self.end_timestamp())
    }

    /// Range covering everything from genesis through the completed day.
    #[must_use]
    pub fn cumulative_range(&self) -> TimeRange {
        TimeRange::until(self.end_timestamp())
    }
}

/// Timestamp boundaries sent to the indexer's aggregate endpoints.
///
/// Without a start boundary the indexer aggregates from genesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub end_timestamp: i64,
    pub start_timestamp: Option<i64>,
}

impl TimeRange {
    /// Everything up to `end_timestamp`.
    pub fn until(end_timestamp: i64) -> Self {
        Self {
            end_timestamp,
            start_timestamp: None,
        }
    }

    /// The span from `start_timestamp` to `end_timestamp`.
    pub fn between(start_timestamp: i64, end_timestamp: i64) -> Self {
        Self {
            end_timestamp,
            start_timestamp: Some(start_timestamp),
        }
    }

    pub fn is_cumulative(&self) -> bool {
        self.start_timestamp.is_none()
    }
}
