//! Fee totals.
//!
//! The indexer aggregates fees per market server-side; the USD values of
//! the returned records are summed here.

use bigdecimal::BigDecimal;
use levana_metrics_data::{AggregateQuery, IndexerClient, IndexerError};
use levana_metrics_domain::metrics::sum_exact;
use levana_metrics_domain::value_objects::{DayWindow, TimeRange};
use tracing::debug;

/// USD fees paid in `markets` over `range`.
///
/// The query is always sent, even for an empty market set; the indexer's
/// answer for an empty `market` filter is taken as is.
///
/// # Errors
/// Returns [`IndexerError::DataUnavailable`] on transport or schema errors.
pub async fn fees<C>(
    client: &C,
    markets: &[String],
    range: TimeRange,
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    let records = client
        .total_fees(&AggregateQuery::new(markets, range))
        .await?;
    let total = sum_exact(records.iter().map(|record| &record.total_usd));

    debug!(
        records = records.len(),
        markets = markets.len(),
        cumulative = range.is_cumulative(),
        %total,
        "Summed fees"
    );
    Ok(total)
}

/// Fees paid during the window's completed day.
pub async fn daily_fees<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    fees(client, markets, window.daily_range()).await
}

/// Fees paid from genesis through the end of the window's completed day.
pub async fn total_fees<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    fees(client, markets, window.cumulative_range()).await
}
