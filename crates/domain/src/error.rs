use thiserror::Error;

/// Errors raised while deriving date buckets and windows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The unix timestamp cannot be represented as a calendar date.
    #[error("timestamp {0} is outside the supported date range")]
    TimestampOutOfRange(i64),
}
