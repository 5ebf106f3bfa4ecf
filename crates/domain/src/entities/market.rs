use serde::Deserialize;

/// A single perpetuals market contract deployed on a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Market {
    /// Native chain identifier, e.g. `osmosis-1`.
    pub chain: String,
    /// Market contract address.
    pub contract: String,
}

impl Market {
    pub fn new(chain: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            contract: contract.into(),
        }
    }
}

/// Returns the contract addresses of the markets deployed on `chain_id`,
/// in the order they were listed.
pub fn contracts_on_chain(markets: &[Market], chain_id: &str) -> Vec<String> {
    markets
        .iter()
        .filter(|market| market.chain == chain_id)
        .map(|market| market.contract.clone())
        .collect()
}
