use levana_metrics_data::IndexerError;
use levana_metrics_domain::DomainError;
use thiserror::Error;

/// Errors from fetching a chain's metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The indexer could not supply a required value.
    #[error(transparent)]
    Indexer(#[from] IndexerError),
    /// The requested timestamp has no reporting window.
    #[error(transparent)]
    Window(#[from] DomainError),
    /// The chain is not in the configuration table.
    #[error("unknown chain: {0}")]
    UnknownChain(String),
    /// The requested timestamp predates the chain's first market.
    #[error("timestamp {timestamp} is before the {chain} start at {start}")]
    BeforeStart {
        chain: String,
        timestamp: i64,
        start: i64,
    },
    /// The chain does not run at current time and no timestamp was given.
    #[error("chain {0} requires an explicit timestamp")]
    TimestampRequired(String),
}
