//! Request and response schemas for the indexer endpoints.
//!
//! Responses are decoded strictly: a body that does not fit these shapes is
//! rejected as [`IndexerError::DataUnavailable`] rather than read loosely.
//! Amounts are decoded from their decimal strings into [`BigDecimal`], so
//! 18-decimal on-chain values keep every digit.

use crate::error::IndexerError;
use levana_metrics_domain::value_objects::{DateBucket, DayWindow, TimeRange};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Which volume series to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeKind {
    /// Volume traded within each day.
    Daily,
    /// Running total of volume since genesis, sampled per day.
    Cumulative,
}

impl VolumeKind {
    pub fn path(&self) -> &'static str {
        match self {
            VolumeKind::Daily => "/trade-volume",
            VolumeKind::Cumulative => "/cumulative-trade-volume",
        }
    }
}

/// A volume-by-date request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeQuery {
    pub kind: VolumeKind,
    pub start_date: DateBucket,
    pub end_date: DateBucket,
}

impl VolumeQuery {
    /// Daily volume over `[previous day, current day]`.
    pub fn daily(window: &DayWindow) -> Self {
        Self {
            kind: VolumeKind::Daily,
            start_date: window.previous_day(),
            end_date: window.current_day(),
        }
    }

    /// Cumulative volume sampled at the previous day only.
    pub fn cumulative(window: &DayWindow) -> Self {
        Self {
            kind: VolumeKind::Cumulative,
            start_date: window.previous_day(),
            end_date: window.previous_day(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("scope", "daily".to_string()),
            ("start_date", self.start_date.to_string()),
            ("end_date", self.end_date.to_string()),
        ]
    }
}

/// Volume response: date key to market address to volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TradeVolume(pub BTreeMap<String, BTreeMap<String, BigDecimal>>);

impl TradeVolume {
    /// Per-market volumes for one day.
    ///
    /// # Errors
    /// Returns [`IndexerError::MissingDateBucket`] when the day is absent.
    pub fn bucket(
        &self,
        date: &DateBucket,
    ) -> Result<&BTreeMap<String, BigDecimal>, IndexerError> {
        let key = date.to_string();
        self.0
            .get(&key)
            .ok_or_else(|| IndexerError::missing_bucket(key))
    }
}

/// One fee record from `/get-total-fees`.
///
/// Only `total_usd` is required; it is the value the metrics are built on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TotalFees {
    /// Fee kind.
    #[serde(default)]
    pub name: String,
    /// Amount in collateral units.
    #[serde(default)]
    pub total: Option<BigDecimal>,
    /// Amount in USD.
    pub total_usd: BigDecimal,
}

/// Response of the profit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TotalRevenue {
    /// Amount in collateral units.
    #[serde(default)]
    pub total: Option<BigDecimal>,
    /// Amount in USD.
    pub total_usd: BigDecimal,
}

/// Which revenue series to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueKind {
    /// Revenue retained by the protocol.
    Protocol,
    /// Revenue accrued to liquidity providers.
    SupplySide,
}

impl RevenueKind {
    pub fn path(&self) -> &'static str {
        match self {
            RevenueKind::Protocol => "/get-protocol-profits",
            RevenueKind::SupplySide => "/get-lp-profits",
        }
    }
}

/// Markets plus time boundaries for the server-side aggregate endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateQuery {
    pub markets: Vec<String>,
    pub range: TimeRange,
}

impl AggregateQuery {
    pub fn new(markets: &[String], range: TimeRange) -> Self {
        Self {
            markets: markets.to_vec(),
            range,
        }
    }

    /// `market=A&market=B&...&end_timestamp=T[&start_timestamp=T0]`
    ///
    /// An empty market set is still sent as a single empty `market=` filter,
    /// leaving the indexer to answer for no markets.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = if self.markets.is_empty() {
            vec![("market", String::new())]
        } else {
            self.markets
                .iter()
                .map(|market| ("market", market.clone()))
                .collect()
        };
        pairs.push(("end_timestamp", self.range.end_timestamp.to_string()));
        if let Some(start) = self.range.start_timestamp {
            pairs.push(("start_timestamp", start.to_string()));
        }
        pairs
    }
}
