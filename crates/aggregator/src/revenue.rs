//! Protocol and supply-side revenue totals.

use bigdecimal::BigDecimal;
use levana_metrics_data::{AggregateQuery, IndexerClient, IndexerError, RevenueKind};
use levana_metrics_domain::value_objects::{DayWindow, TimeRange};
use tracing::debug;

/// USD revenue of `kind` earned in `markets` over `range`.
///
/// The indexer returns a single pre-aggregated total. An empty market set is
/// sent as an empty `market` filter like any other query.
///
/// # Errors
/// Returns [`IndexerError::DataUnavailable`] on transport or schema errors.
pub async fn revenue<C>(
    client: &C,
    markets: &[String],
    kind: RevenueKind,
    range: TimeRange,
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    let response = client
        .revenue(kind, &AggregateQuery::new(markets, range))
        .await?;

    debug!(
        endpoint = kind.path(),
        markets = markets.len(),
        cumulative = range.is_cumulative(),
        total = %response.total_usd,
        "Fetched revenue"
    );
    Ok(response.total_usd)
}

/// Revenue earned during the window's completed day.
pub async fn daily_revenue<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
    kind: RevenueKind,
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    revenue(client, markets, kind, window.daily_range()).await
}

/// Revenue earned from genesis through the end of the window's completed day.
pub async fn total_revenue<C>(
    client: &C,
    window: &DayWindow,
    markets: &[String],
    kind: RevenueKind,
) -> Result<BigDecimal, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    revenue(client, markets, kind, window.cumulative_range()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixtureIndexer, dec};

    const TS: i64 = 1_704_196_800;

    fn markets() -> Vec<String> {
        vec!["addrA".to_string()]
    }

    #[tokio::test]
    async fn test_kinds_are_independent() {
        let mut indexer = FixtureIndexer::default();
        indexer.daily_revenue.insert(RevenueKind::Protocol, dec("0.2"));
        indexer.daily_revenue.insert(RevenueKind::SupplySide, dec("0.1"));
        let window = DayWindow::ending_before(TS).unwrap();

        let protocol = daily_revenue(&indexer, &window, &markets(), RevenueKind::Protocol)
            .await
            .unwrap();
        let supply_side = daily_revenue(&indexer, &window, &markets(), RevenueKind::SupplySide)
            .await
            .unwrap();

        assert_eq!(protocol, dec("0.2"));
        assert_eq!(supply_side, dec("0.1"));
    }

    #[tokio::test]
    async fn test_total_revenue_is_cumulative() {
        let mut indexer = FixtureIndexer::default();
        indexer.total_revenue.insert(RevenueKind::SupplySide, dec("-12.5"));
        let window = DayWindow::ending_before(TS).unwrap();

        let total = total_revenue(&indexer, &window, &markets(), RevenueKind::SupplySide)
            .await
            .unwrap();
        assert_eq!(total, dec("-12.5"));
        assert!(indexer.recorded_queries()[0].range.is_cumulative());
    }

    #[tokio::test]
    async fn test_empty_market_set_still_queries_the_indexer() {
        let mut indexer = FixtureIndexer::default();
        indexer.daily_revenue.insert(RevenueKind::Protocol, dec("0"));
        let window = DayWindow::ending_before(TS).unwrap();

        let total = daily_revenue(&indexer, &window, &[], RevenueKind::Protocol)
            .await
            .unwrap();
        assert_eq!(total, dec("0"));

        let queries = indexer.recorded_queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].markets.is_empty());
        assert_eq!(queries[0].range.start_timestamp, Some(1_704_067_200));
    }

    #[tokio::test]
    async fn test_missing_revenue_propagates() {
        let indexer = FixtureIndexer::default();
        let window = DayWindow::ending_before(TS).unwrap();

        let err = daily_revenue(&indexer, &window, &markets(), RevenueKind::Protocol)
            .await
            .unwrap_err();
        assert!(matches!(err, IndexerError::DataUnavailable { .. }));
    }
}
