//! Command Line Interface for Levana perpetuals metrics.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use levana_metrics_aggregator::MetricsAdapter;
use levana_metrics_aggregator::resolver::resolve_markets;
use levana_metrics_data::IndexerConfig;
use levana_metrics_data::providers::HttpIndexer;
use levana_metrics_domain::ChainRegistry;
use serde_json::json;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "levana-metrics")]
#[command(about = "Daily and cumulative Levana perpetuals metrics from the indexer", long_about = None)]
struct Cli {
    /// Indexer base URL (overrides LEVANA_INDEXER_URL)
    #[arg(long, global = true)]
    indexer_url: Option<String>,

    /// Request timeout in seconds (overrides LEVANA_INDEXER_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured chains
    Chains,
    /// List the market contracts on a chain
    Markets {
        /// Native chain id (e.g., osmosis-1)
        #[arg(short, long)]
        chain_id: String,
    },
    /// Fetch metrics for one configured chain
    Fetch {
        /// Configured chain name (e.g., osmosis)
        #[arg(short, long)]
        chain: String,

        /// Unix timestamp to report for; defaults to now
        #[arg(short, long)]
        timestamp: Option<i64>,
    },
    /// Fetch metrics for every configured chain
    FetchAll {
        /// Unix timestamp to report for; defaults to now
        #[arg(short, long)]
        timestamp: Option<i64>,
    },
}

impl Cli {
    fn indexer_config(&self) -> IndexerConfig {
        let mut config = IndexerConfig::from_env();
        if let Some(url) = &self.indexer_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.indexer_config();
    info!(indexer = %config.base_url, "Using indexer");

    let client = HttpIndexer::new(config).context("building indexer client")?;
    let adapter = MetricsAdapter::new(client, ChainRegistry::levana());

    match &cli.command {
        Commands::Chains => {
            println!(
                "{:<10} | {:<12} | {:<12} | {:<10} | {:<10}",
                "Chain", "Chain ID", "Start", "Since", "Live"
            );
            println!("{}", "-".repeat(66));
            for (name, chain) in adapter.chains().iter() {
                let since = chrono::DateTime::from_timestamp(chain.start_timestamp, 0)
                    .unwrap_or_default();
                println!(
                    "{:<10} | {:<12} | {:<12} | {:<10} | {:<10}",
                    name,
                    chain.chain_id,
                    chain.start_timestamp,
                    since.format("%Y-%m-%d"),
                    chain.use_current_time
                );
            }

            let methodology = adapter.methodology();
            println!("\nMethodology");
            println!("  Fees:              {}", methodology.fees);
            println!("  Revenue:           {}", methodology.revenue);
            println!("  SupplySideRevenue: {}", methodology.supply_side_revenue);
        }
        Commands::Markets { chain_id } => {
            let markets = resolve_markets(adapter.client(), chain_id)
                .await
                .with_context(|| format!("resolving markets for {chain_id}"))?;

            println!("{} markets on {}:", markets.len(), chain_id);
            for market in markets {
                println!("  {market}");
            }
        }
        Commands::Fetch { chain, timestamp } => {
            let record = adapter
                .fetch_chain(chain, *timestamp)
                .await
                .with_context(|| format!("fetching metrics for {chain}"))?;

            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::FetchAll { timestamp } => {
            let reports = adapter.fetch_all(*timestamp).await;
            let failed = reports.iter().filter(|r| r.result.is_err()).count();

            let output: serde_json::Map<String, serde_json::Value> = reports
                .into_iter()
                .map(|report| -> Result<(String, serde_json::Value)> {
                    let value = match report.result {
                        Ok(record) => serde_json::to_value(record)?,
                        Err(e) => json!({ "error": e.to_string() }),
                    };
                    Ok((report.chain, value))
                })
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);

            if failed > 0 {
                anyhow::bail!("{failed} chain(s) failed");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "levana-metrics",
            "fetch",
            "--chain",
            "osmosis",
            "--timestamp",
            "1704196800",
            "--indexer-url",
            "http://localhost:8080",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.indexer_config();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(matches!(
            cli.command,
            Commands::Fetch { ref chain, timestamp: Some(1_704_196_800) } if chain == "osmosis"
        ));
    }

    #[test]
    fn test_fetch_all_timestamp_is_optional() {
        let cli = Cli::try_parse_from(["levana-metrics", "fetch-all"]).unwrap();
        assert!(matches!(cli.command, Commands::FetchAll { timestamp: None }));
    }
}
