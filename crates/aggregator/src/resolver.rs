//! Resolves the markets deployed on a chain.

use levana_metrics_data::{IndexerClient, IndexerError};
use levana_metrics_domain::entities::contracts_on_chain;
use tracing::{debug, warn};

/// Returns the contract addresses of every market on `chain_id`.
///
/// The market list is read fresh from the indexer on every call.
///
/// # Errors
/// Returns [`IndexerError::DataUnavailable`] if the market list cannot be
/// fetched or decoded.
pub async fn resolve_markets<C>(client: &C, chain_id: &str) -> Result<Vec<String>, IndexerError>
where
    C: IndexerClient + ?Sized,
{
    let markets = client.markets().await?;
    let contracts = contracts_on_chain(&markets, chain_id);

    if contracts.is_empty() {
        warn!(chain = chain_id, listed = markets.len(), "No markets listed for chain");
    } else {
        debug!(chain = chain_id, markets = contracts.len(), "Resolved markets");
    }

    Ok(contracts)
}
