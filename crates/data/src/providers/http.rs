use crate::config::IndexerConfig;
use crate::error::IndexerError;
use crate::IndexerClient;
use crate::models::{
    AggregateQuery, RevenueKind, TotalFees, TotalRevenue, TradeVolume, VolumeQuery,
};
use async_trait::async_trait;
use levana_metrics_domain::entities::Market;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const MARKETS_PATH: &str = "/markets";
const TOTAL_FEES_PATH: &str = "/get-total-fees";
/// Longest slice of an error body kept in error messages.
const MAX_ERROR_BODY: usize = 256;

/// Indexer client over HTTP.
///
/// Every call is a single GET; failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct HttpIndexer {
    client: Client,
    config: IndexerConfig,
}

impl HttpIndexer {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    /// Returns [`IndexerError::DataUnavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: IndexerConfig) -> Result<Self, IndexerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IndexerError::unavailable(config.base_url.clone(), e))?;
        Ok(Self { client, config })
    }

    /// Uses an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, config: IndexerConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, IndexerError> {
        let url = self.config.endpoint_url(path);
        debug!(%url, params = query.len(), "Querying indexer");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "Indexer request failed");
                IndexerError::unavailable(path, e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IndexerError::unavailable(path, e))?;

        if !status.is_success() {
            warn!(%url, %status, "Indexer returned an error status");
            let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(IndexerError::unavailable(
                path,
                format!("HTTP {status}: {excerpt}"),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "Malformed indexer response");
            IndexerError::unavailable(path, format!("malformed response: {e}"))
        })
    }
}

#[async_trait]
impl IndexerClient for HttpIndexer {
    async fn markets(&self) -> Result<Vec<Market>, IndexerError> {
        self.get_json(MARKETS_PATH, &[]).await
    }

    async fn trade_volume(&self, query: &VolumeQuery) -> Result<TradeVolume, IndexerError> {
        self.get_json(query.kind.path(), &query.query_pairs()).await
    }

    async fn total_fees(&self, query: &AggregateQuery) -> Result<Vec<TotalFees>, IndexerError> {
        self.get_json(TOTAL_FEES_PATH, &query.query_pairs()).await
    }

    async fn revenue(
        &self,
        kind: RevenueKind,
        query: &AggregateQuery,
    ) -> Result<TotalRevenue, IndexerError> {
        self.get_json(kind.path(), &query.query_pairs()).await
    }
}
