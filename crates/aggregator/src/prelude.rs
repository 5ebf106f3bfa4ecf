//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use levana_metrics_aggregator::prelude::*;
//! ```

pub use crate::adapter::{ChainReport, MetricsAdapter};
pub use crate::error::MetricsError;
pub use crate::fees::{daily_fees, fees, total_fees};
pub use crate::fetch::fetch;
pub use crate::resolver::resolve_markets;
pub use crate::revenue::{daily_revenue, revenue, total_revenue};
pub use crate::volume::{daily_volume, sum_market_volumes, total_volume};

pub use levana_metrics_data::{IndexerClient, IndexerConfig, IndexerError, RevenueKind};
pub use levana_metrics_domain::metrics::{Dimensions, MetricsRecord, render_decimal};
pub use levana_metrics_domain::value_objects::{DayWindow, TimeRange};
pub use levana_metrics_domain::{ChainConfig, ChainRegistry};
