//! In-memory indexer used by the unit tests.

use async_trait::async_trait;
use levana_metrics_data::{
    AggregateQuery, IndexerClient, IndexerError, RevenueKind, TotalFees, TotalRevenue,
    TradeVolume, VolumeKind, VolumeQuery,
};
use levana_metrics_domain::entities::Market;
use levana_metrics_domain::value_objects::DateBucket;
use bigdecimal::BigDecimal;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::Mutex;

pub(crate) type DayVolumes = BTreeMap<DateBucket, BTreeMap<String, BigDecimal>>;

/// Canned indexer answers. Unset values answer with `DataUnavailable`.
#[derive(Default)]
pub(crate) struct FixtureIndexer {
    pub markets: Vec<Market>,
    pub daily_volume: DayVolumes,
    pub cumulative_volume: DayVolumes,
    pub daily_fees: Option<Vec<TotalFees>>,
    pub total_fees: Option<Vec<TotalFees>>,
    pub daily_revenue: HashMap<RevenueKind, BigDecimal>,
    pub total_revenue: HashMap<RevenueKind, BigDecimal>,
    pub fail_markets: bool,
    pub aggregate_queries: Mutex<Vec<AggregateQuery>>,
}

pub(crate) fn fee(usd: BigDecimal) -> TotalFees {
    TotalFees {
        name: "trading".to_string(),
        total: None,
        total_usd: usd,
    }
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> DateBucket {
    DateBucket::from_ymd(year, month, day).unwrap()
}

pub(crate) fn volumes(entries: &[(&str, BigDecimal)]) -> BTreeMap<String, BigDecimal> {
    entries
        .iter()
        .map(|(market, volume)| (market.to_string(), volume.clone()))
        .collect()
}

pub(crate) fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

impl FixtureIndexer {
    pub fn recorded_queries(&self) -> Vec<AggregateQuery> {
        self.aggregate_queries.lock().unwrap().clone()
    }

    fn record(&self, query: &AggregateQuery) {
        self.aggregate_queries.lock().unwrap().push(query.clone());
    }
}

#[async_trait]
impl IndexerClient for FixtureIndexer {
    async fn markets(&self) -> Result<Vec<Market>, IndexerError> {
        if self.fail_markets {
            return Err(IndexerError::unavailable("/markets", "connection refused"));
        }
        Ok(self.markets.clone())
    }

    async fn trade_volume(&self, query: &VolumeQuery) -> Result<TradeVolume, IndexerError> {
        let source = match query.kind {
            VolumeKind::Daily => &self.daily_volume,
            VolumeKind::Cumulative => &self.cumulative_volume,
        };
        let selected = source
            .range(query.start_date..=query.end_date)
            .map(|(date, volumes)| (date.to_string(), volumes.clone()))
            .collect();
        Ok(TradeVolume(selected))
    }

    async fn total_fees(&self, query: &AggregateQuery) -> Result<Vec<TotalFees>, IndexerError> {
        self.record(query);
        let fees = if query.range.is_cumulative() {
            &self.total_fees
        } else {
            &self.daily_fees
        };
        fees.clone()
            .ok_or_else(|| IndexerError::unavailable("/get-total-fees", "no fixture"))
    }

    async fn revenue(
        &self,
        kind: RevenueKind,
        query: &AggregateQuery,
    ) -> Result<TotalRevenue, IndexerError> {
        self.record(query);
        let table = if query.range.is_cumulative() {
            &self.total_revenue
        } else {
            &self.daily_revenue
        };
        table
            .get(&kind)
            .map(|usd| TotalRevenue {
                total: None,
                total_usd: usd.clone(),
            })
            .ok_or_else(|| IndexerError::unavailable(kind.path(), "no fixture"))
    }
}
