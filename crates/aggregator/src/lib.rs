//! Daily and cumulative metrics aggregation.
//!
//! This crate turns indexer responses into a [`MetricsRecord`]:
//! - Market resolution per chain
//! - Volume summation over the resolved markets
//! - Fee and revenue totals for the daily and cumulative windows
//! - The concurrent top-level fetch and the per-chain adapter
//!
//! [`MetricsRecord`]: levana_metrics_domain::metrics::MetricsRecord

/// Prelude module for convenient imports.
pub mod prelude;

/// Per-chain adapter over the configured chains.
pub mod adapter;
/// Error types.
pub mod error;
/// Fee totals.
pub mod fees;
/// Top-level fetch.
pub mod fetch;
/// Market resolution.
pub mod resolver;
/// Revenue totals.
pub mod revenue;
/// Volume totals.
pub mod volume;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{ChainReport, MetricsAdapter};
pub use error::MetricsError;
pub use fetch::fetch;
