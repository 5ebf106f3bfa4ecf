//! Access to the Levana indexer HTTP API.
//!
//! This crate provides:
//! - Typed schemas for every indexer response used by the metrics
//! - The [`IndexerClient`] trait that aggregators are written against
//! - [`providers::HttpIndexer`], the `reqwest` implementation

/// Indexer connection settings.
pub mod config;
/// Error types.
pub mod error;
/// Indexer request and response schemas.
pub mod models;
/// Indexer client implementations.
pub mod providers;

pub use config::IndexerConfig;
pub use error::IndexerError;
pub use models::{
    AggregateQuery, RevenueKind, TotalFees, TotalRevenue, TradeVolume, VolumeKind, VolumeQuery,
};

use async_trait::async_trait;
use levana_metrics_domain::entities::Market;

/// Read-only view of the indexer endpoints the metrics are built from.
#[async_trait]
pub trait IndexerClient: Send + Sync {
    /// Lists every market on every chain.
    async fn markets(&self) -> Result<Vec<Market>, IndexerError>;

    /// Per-day, per-market volumes for the requested date range.
    async fn trade_volume(&self, query: &VolumeQuery) -> Result<TradeVolume, IndexerError>;

    /// Fee totals for the requested markets, one record per fee kind.
    async fn total_fees(&self, query: &AggregateQuery) -> Result<Vec<TotalFees>, IndexerError>;

    /// Pre-aggregated revenue for the requested markets.
    async fn revenue(
        &self,
        kind: RevenueKind,
        query: &AggregateQuery,
    ) -> Result<TotalRevenue, IndexerError>;
}
