//! The per-invocation metrics record.

use crate::metrics::render_decimal;
use bigdecimal::BigDecimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The four metrics reported for one aggregation window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Notional trading volume in USD.
    pub volume: BigDecimal,
    /// Fees paid by traders in USD.
    pub fees: BigDecimal,
    /// Revenue retained by the protocol in USD.
    pub protocol_revenue: BigDecimal,
    /// Revenue accrued to liquidity providers in USD.
    pub supply_side_revenue: BigDecimal,
}

/// Daily and cumulative metrics for one chain at one timestamp.
///
/// Fees and protocol revenue are each stored once and exposed under two
/// names (`fees`/`user_fees`, `revenue`/`protocol_revenue`), so the aliased
/// keys of the serialized record always carry identical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRecord {
    /// The timestamp the metrics were requested for.
    pub timestamp: i64,
    /// Metrics for the completed UTC day before `timestamp`.
    pub daily: Dimensions,
    /// Metrics from genesis through the end of that day.
    pub total: Dimensions,
}

impl MetricsRecord {
    pub fn new(timestamp: i64, daily: Dimensions, total: Dimensions) -> Self {
        Self {
            timestamp,
            daily,
            total,
        }
    }

    pub fn daily_volume(&self) -> &BigDecimal {
        &self.daily.volume
    }

    pub fn daily_fees(&self) -> &BigDecimal {
        &self.daily.fees
    }

    pub fn daily_user_fees(&self) -> &BigDecimal {
        &self.daily.fees
    }

    pub fn daily_revenue(&self) -> &BigDecimal {
        &self.daily.protocol_revenue
    }

    pub fn daily_protocol_revenue(&self) -> &BigDecimal {
        &self.daily.protocol_revenue
    }

    pub fn daily_supply_side_revenue(&self) -> &BigDecimal {
        &self.daily.supply_side_revenue
    }

    pub fn total_volume(&self) -> &BigDecimal {
        &self.total.volume
    }

    pub fn total_fees(&self) -> &BigDecimal {
        &self.total.fees
    }

    pub fn total_user_fees(&self) -> &BigDecimal {
        &self.total.fees
    }

    pub fn total_revenue(&self) -> &BigDecimal {
        &self.total.protocol_revenue
    }

    pub fn total_protocol_revenue(&self) -> &BigDecimal {
        &self.total.protocol_revenue
    }

    pub fn total_supply_side_revenue(&self) -> &BigDecimal {
        &self.total.supply_side_revenue
    }
}

impl Serialize for MetricsRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let daily_fees = render_decimal(self.daily_fees());
        let daily_revenue = render_decimal(self.daily_revenue());
        let total_fees = render_decimal(self.total_fees());
        let total_revenue = render_decimal(self.total_revenue());

        let mut state = serializer.serialize_struct("MetricsRecord", 13)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("dailyVolume", &render_decimal(self.daily_volume()))?;
        state.serialize_field("dailyFees", &daily_fees)?;
        state.serialize_field("dailyUserFees", &daily_fees)?;
        state.serialize_field("dailyRevenue", &daily_revenue)?;
        state.serialize_field("dailyProtocolRevenue", &daily_revenue)?;
        state.serialize_field(
            "dailySupplySideRevenue",
            &render_decimal(self.daily_supply_side_revenue()),
        )?;
        state.serialize_field("totalVolume", &render_decimal(self.total_volume()))?;
        state.serialize_field("totalFees", &total_fees)?;
        state.serialize_field("totalUserFees", &total_fees)?;
        state.serialize_field("totalRevenue", &total_revenue)?;
        state.serialize_field("totalProtocolRevenue", &total_revenue)?;
        state.serialize_field(
            "totalSupplySideRevenue",
            &render_decimal(self.total_supply_side_revenue()),
        )?;
        state.end()
    }
}
