//! Per-chain configuration table.

use std::collections::BTreeMap;

/// Osmosis launch of the ATOM/USD market, the first market on the chain.
pub const OSMOSIS_START: i64 = 1_686_025_556;
/// Sei launch of the SEI/USD market, the first market on the chain.
pub const SEI_START: i64 = 1_692_345_706;

/// How metrics are collected for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Native chain identifier as reported by the indexer's market list.
    pub chain_id: String,
    /// First timestamp with data on this chain.
    pub start_timestamp: i64,
    /// Collect relative to wall-clock time when no timestamp is requested.
    pub use_current_time: bool,
}

impl ChainConfig {
    pub fn new(chain_id: impl Into<String>, start_timestamp: i64) -> Self {
        Self {
            chain_id: chain_id.into(),
            start_timestamp,
            use_current_time: true,
        }
    }

    /// Requires an explicit timestamp for every fetch.
    #[must_use]
    pub fn replay_only(mut self) -> Self {
        self.use_current_time = false;
        self
    }
}

/// Chain name to configuration mapping, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<String, ChainConfig>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chains Levana markets are deployed on.
    pub fn levana() -> Self {
        Self::new()
            .with_chain("osmosis", ChainConfig::new("osmosis-1", OSMOSIS_START))
            .with_chain("sei", ChainConfig::new("pacific-1", SEI_START))
    }

    #[must_use]
    pub fn with_chain(mut self, name: impl Into<String>, config: ChainConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, config: ChainConfig) {
        self.chains.insert(name.into(), config);
    }

    pub fn get(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChainConfig)> {
        self.chains.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
