//! Top-level metrics fetch for one chain.

use crate::error::MetricsError;
use crate::fees::{daily_fees, total_fees};
use crate::resolver::resolve_markets;
use crate::revenue::{daily_revenue, total_revenue};
use crate::volume::{daily_volume, total_volume};
use levana_metrics_data::{IndexerClient, RevenueKind};
use levana_metrics_domain::metrics::{Dimensions, MetricsRecord};
use levana_metrics_domain::value_objects::DayWindow;
use tracing::info;

/// Fetches daily and cumulative metrics for `chain_id` at `timestamp`.
///
/// Markets are resolved once, then the eight metric queries run
/// concurrently. The first failure fails the whole fetch; there are no
/// partial records.
///
/// # Errors
/// Returns [`MetricsError::Indexer`] if any query fails and
/// [`MetricsError::Window`] if `timestamp` has no reporting window.
pub async fn fetch<C>(client: &C, timestamp: i64, chain_id: &str) -> Result<MetricsRecord, MetricsError>
where
    C: IndexerClient + ?Sized,
{
    let window = DayWindow::ending_before(timestamp)?;
    let markets = resolve_markets(client, chain_id).await?;

    info!(
        chain = chain_id,
        date = %window.previous_day(),
        markets = markets.len(),
        "Fetching metrics"
    );

    let (
        daily_volume,
        daily_fees,
        daily_protocol_revenue,
        daily_supply_side_revenue,
        total_volume,
        total_fees,
        total_protocol_revenue,
        total_supply_side_revenue,
    ) = tokio::try_join!(
        daily_volume(client, &window, &markets),
        daily_fees(client, &window, &markets),
        daily_revenue(client, &window, &markets, RevenueKind::Protocol),
        daily_revenue(client, &window, &markets, RevenueKind::SupplySide),
        total_volume(client, &window, &markets),
        total_fees(client, &window, &markets),
        total_revenue(client, &window, &markets, RevenueKind::Protocol),
        total_revenue(client, &window, &markets, RevenueKind::SupplySide),
    )?;

    let record = MetricsRecord::new(
        timestamp,
        Dimensions {
            volume: daily_volume,
            fees: daily_fees,
            protocol_revenue: daily_protocol_revenue,
            supply_side_revenue: daily_supply_side_revenue,
        },
        Dimensions {
            volume: total_volume,
            fees: total_fees,
            protocol_revenue: total_protocol_revenue,
            supply_side_revenue: total_supply_side_revenue,
        },
    );

    info!(
        chain = chain_id,
        daily_volume = %record.daily_volume(),
        total_volume = %record.total_volume(),
        "Metrics fetched"
    );
    Ok(record)
}
