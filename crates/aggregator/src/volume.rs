//! Volume totals over the resolved markets.
//!
//! The indexer reports volume per market and per day; the totals here are
//! summed client-side, restricted to the markets of the chain being
//! reported. A day missing from the response is an error, never zero.

use bigdecimal::BigDecimal;
use levana_metrics_data::{IndexerClient, IndexerError, VolumeQuery};
use levana_metrics_domain::metrics::sum_exact;
use levana_metrics_domain::value_objects::DayWindow;
use std::collections::BTreeMap;
use tracing::debug;

/// Volume traded during the window's completed day.
///
/// # Errors
/// [`IndexerError::MissingDateBucket`] if the day is absent from the
/// response, [`IndexerError::DataUnavailable`] on transport or schema errors.
pub async fn daily_volume<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    volume_for_day(client, VolumeQuery::daily(window), window, markets).await
}

/// Volume traded from genesis through the end of the window's completed day.
///
/// # Errors
/// Same as [`daily_volume`].
pub async fn total_volume<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    volume_for_day(client, VolumeQuery::cumulative(window), window, markets).await
}

async fn volume_for_day<C>(
    client: &C,
    query: VolumeQuery,
    window: &DayWindow,
    markets: &[String],
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    let day = window.previous_day();
    let response = client.trade_volume(&query).await?;
    let bucket = response.bucket(&day)?;

    let total = sum_market_volumes(bucket, markets);

    debug!(
        endpoint = query.kind.path(),
        date = %day,
        markets = markets.len(),
        %total,
        "Summed volume"
    );
    Ok(total)
}

/// Sums the volumes of `markets` found in one day's bucket.
///
/// Markets in the bucket but not in `markets` are ignored; markets with no
/// entry contribute nothing.
pub fn sum_market_volumes(
    bucket: &BTreeMap<String, BigDecimal>,
    markets: &[String],
) -> BigDecimal {
    sum_exact(
        bucket
            .iter()
            .filter(|(market, _)| markets.contains(*market))
            .map(|(_, volume)| volume),
    )
}
