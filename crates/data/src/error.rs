use thiserror::Error;

/// Failures talking to the indexer or interpreting its answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexerError {
    /// Transport failure, non-2xx status, or a body that does not match the
    /// expected schema.
    #[error("data unavailable from {endpoint}: {reason}")]
    DataUnavailable { endpoint: String, reason: String },
    /// A volume response has no entry for the requested day. This is an
    /// upstream gap, not zero volume.
    #[error("no volume bucket for {date}")]
    MissingDateBucket { date: String },
}

impl IndexerError {
    pub fn unavailable(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_bucket(date: impl ToString) -> Self {
        Self::MissingDateBucket {
            date: date.to_string(),
        }
    }
}
