//! Per-chain adapter over the configured chains.
//!
//! The adapter owns the indexer client and the chain table. A scheduler
//! calls [`MetricsAdapter::fetch_chain`] once per chain and cycle, either
//! with a replay timestamp or with none to report relative to now.

use crate::error::MetricsError;
use crate::fetch::fetch;
use chrono::Utc;
use levana_metrics_data::IndexerClient;
use levana_metrics_domain::ChainConfig;
use levana_metrics_domain::ChainRegistry;
use levana_metrics_domain::metrics::{Methodology, MetricsRecord};
use tracing::{info, warn};

/// Outcome of fetching one chain.
#[derive(Debug)]
pub struct ChainReport {
    /// Configured chain name.
    pub chain: String,
    /// The record, or why it could not be produced.
    pub result: Result<MetricsRecord, MetricsError>,
}

/// Metrics adapter for every configured chain.
pub struct MetricsAdapter<C> {
    client: C,
    chains: ChainRegistry,
    methodology: Methodology,
}

impl<C: IndexerClient> MetricsAdapter<C> {
    /// Creates an adapter with the default methodology text.
    pub fn new(client: C, chains: ChainRegistry) -> Self {
        Self {
            client,
            chains,
            methodology: Methodology::default(),
        }
    }

    #[must_use]
    pub fn with_methodology(mut self, methodology: Methodology) -> Self {
        self.methodology = methodology;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn chains(&self) -> &ChainRegistry {
        &self.chains
    }

    pub fn methodology(&self) -> &Methodology {
        &self.methodology
    }

    /// First timestamp with data for `chain`.
    ///
    /// # Errors
    /// Returns [`MetricsError::UnknownChain`] if the chain is not configured.
    pub fn start(&self, chain: &str) -> Result<i64, MetricsError> {
        Ok(self.config(chain)?.start_timestamp)
    }

    /// Fetches metrics for one configured chain.
    ///
    /// `requested` is always honored when given. Without it, chains that
    /// run at current time report relative to the wall clock.
    ///
    /// # Errors
    /// Configuration errors ([`MetricsError::UnknownChain`],
    /// [`MetricsError::TimestampRequired`], [`MetricsError::BeforeStart`])
    /// and any error from [`fetch`].
    pub async fn fetch_chain(
        &self,
        chain: &str,
        requested: Option<i64>,
    ) -> Result<MetricsRecord, MetricsError> {
        self.fetch_chain_at(chain, requested, Utc::now().timestamp())
            .await
    }

    /// Same as [`fetch_chain`](Self::fetch_chain) with an explicit "now".
    pub async fn fetch_chain_at(
        &self,
        chain: &str,
        requested: Option<i64>,
        now: i64,
    ) -> Result<MetricsRecord, MetricsError> {
        let config = self.config(chain)?;
        let timestamp = resolve_timestamp(chain, config, requested, now)?;

        info!(chain, chain_id = %config.chain_id, timestamp, "Fetching chain metrics");
        fetch(&self.client, timestamp, &config.chain_id).await
    }

    /// Fetches every configured chain in name order.
    ///
    /// Chains are independent: one chain failing does not hide the others.
    pub async fn fetch_all(&self, requested: Option<i64>) -> Vec<ChainReport> {
        let now = Utc::now().timestamp();
        let mut reports = Vec::with_capacity(self.chains.len());

        for (chain, _) in self.chains.iter() {
            let result = self.fetch_chain_at(chain, requested, now).await;
            if let Err(e) = &result {
                warn!(chain, error = %e, "Chain metrics unavailable");
            }
            reports.push(ChainReport {
                chain: chain.to_string(),
                result,
            });
        }

        reports
    }

    fn config(&self, chain: &str) -> Result<&ChainConfig, MetricsError> {
        self.chains
            .get(chain)
            .ok_or_else(|| MetricsError::UnknownChain(chain.to_string()))
    }
}

fn resolve_timestamp(
    chain: &str,
    config: &ChainConfig,
    requested: Option<i64>,
    now: i64,
) -> Result<i64, MetricsError> {
    let timestamp = match requested {
        Some(timestamp) => timestamp,
        None if config.use_current_time => now,
        None => return Err(MetricsError::TimestampRequired(chain.to_string())),
    };

    if timestamp < config.start_timestamp {
        return Err(MetricsError::BeforeStart {
            chain: chain.to_string(),
            timestamp,
            start: config.start_timestamp,
        });
    }

    Ok(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixtureIndexer, day, dec, fee, volumes};
    use levana_metrics_data::RevenueKind;
    use levana_metrics_domain::entities::Market;

    const TS: i64 = 1_704_196_800;

    fn indexer() -> FixtureIndexer {
        let mut indexer = FixtureIndexer {
            markets: vec![
                Market::new("osmosis-1", "osmoA"),
                Market::new("pacific-1", "seiA"),
            ],
            daily_fees: Some(vec![fee(dec("1"))]),
            total_fees: Some(vec![fee(dec("10"))]),
            ..Default::default()
        };
        for kind in [RevenueKind::Protocol, RevenueKind::SupplySide] {
            indexer.daily_revenue.insert(kind, dec("0.5"));
            indexer.total_revenue.insert(kind, dec("5"));
        }
        indexer.daily_volume.insert(
            day(2024, 1, 1),
            volumes(&[("osmoA", dec("3")), ("seiA", dec("4"))]),
        );
        indexer.cumulative_volume.insert(
            day(2024, 1, 1),
            volumes(&[("osmoA", dec("30")), ("seiA", dec("40"))]),
        );
        indexer
    }

    fn registry() -> ChainRegistry {
        ChainRegistry::new()
            .with_chain("osmosis", ChainConfig::new("osmosis-1", TS - 30 * 86_400))
            .with_chain("sei", ChainConfig::new("pacific-1", TS - 30 * 86_400).replay_only())
    }

    #[test]
    fn test_resolve_timestamp() {
        let live = ChainConfig::new("osmosis-1", 100);
        let replay = ChainConfig::new("pacific-1", 100).replay_only();

        assert_eq!(resolve_timestamp("osmosis", &live, Some(500), 900), Ok(500));
        assert_eq!(resolve_timestamp("osmosis", &live, None, 900), Ok(900));
        assert_eq!(resolve_timestamp("sei", &replay, Some(500), 900), Ok(500));
        assert_eq!(
            resolve_timestamp("sei", &replay, None, 900),
            Err(MetricsError::TimestampRequired("sei".to_string()))
        );
        assert_eq!(
            resolve_timestamp("osmosis", &live, Some(99), 900),
            Err(MetricsError::BeforeStart {
                chain: "osmosis".to_string(),
                timestamp: 99,
                start: 100,
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_chain_uses_chain_id() {
        let adapter = MetricsAdapter::new(indexer(), registry());

        let osmosis = adapter.fetch_chain("osmosis", Some(TS)).await.unwrap();
        assert_eq!(osmosis.daily_volume(), &dec("3"));
        assert_eq!(osmosis.total_volume(), &dec("30"));

        let sei = adapter.fetch_chain("sei", Some(TS)).await.unwrap();
        assert_eq!(sei.daily_volume(), &dec("4"));
    }

    #[tokio::test]
    async fn test_current_time_is_used_when_no_timestamp_is_given() {
        let adapter = MetricsAdapter::new(indexer(), registry());

        let record = adapter.fetch_chain_at("osmosis", None, TS).await.unwrap();
        assert_eq!(record.timestamp, TS);
    }

    #[tokio::test]
    async fn test_unknown_chain() {
        let adapter = MetricsAdapter::new(indexer(), registry());

        assert_eq!(
            adapter.start("injective"),
            Err(MetricsError::UnknownChain("injective".to_string()))
        );
        let err = adapter.fetch_chain("injective", Some(TS)).await.unwrap_err();
        assert_eq!(err, MetricsError::UnknownChain("injective".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_all_reports_each_chain() {
        let adapter = MetricsAdapter::new(indexer(), registry());

        // Without a timestamp the replay-only chain refuses to run.
        let reports = adapter.fetch_all(None).await;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].chain, "osmosis");
        assert_eq!(reports[1].chain, "sei");
        assert!(matches!(
            reports[1].result,
            Err(MetricsError::TimestampRequired(_))
        ));

        let reports = adapter.fetch_all(Some(TS)).await;
        assert!(reports.iter().all(|report| report.result.is_ok()));
    }

    #[test]
    fn test_methodology_defaults_and_overrides() {
        let adapter = MetricsAdapter::new(indexer(), registry());
        assert_eq!(adapter.methodology(), &Methodology::default());

        let custom = Methodology {
            fees: "fees methodology".to_string(),
            revenue: "revenue methodology".to_string(),
            supply_side_revenue: "supply side revenue methodology".to_string(),
        };
        let adapter = adapter.with_methodology(custom.clone());
        assert_eq!(adapter.methodology(), &custom);
        assert_eq!(adapter.chains().len(), 2);
    }

    #[test]
    fn test_start() {
        let adapter = MetricsAdapter::new(indexer(), ChainRegistry::levana());
        assert_eq!(adapter.start("osmosis"), Ok(1_686_025_556));
        assert_eq!(adapter.start("sei"), Ok(1_692_345_706));
    }
}
