use std::env;
use std::time::Duration;

/// Public Levana indexer.
pub const DEFAULT_INDEXER_URL: &str = "https://indexer.levana.finance";
/// Per-request timeout applied by the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const URL_VAR: &str = "LEVANA_INDEXER_URL";
const TIMEOUT_VAR: &str = "LEVANA_INDEXER_TIMEOUT_SECS";

/// Connection settings for the indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Base URL, without a trailing path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEXER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl IndexerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `LEVANA_INDEXER_URL` and `LEVANA_INDEXER_TIMEOUT_SECS`, falling
    /// back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(URL_VAR)
            && !url.trim().is_empty()
        {
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
