/// Human-readable description of how each reported metric is derived.
///
/// The default text only names the indexer figures each metric relays; an
/// adapter can be given different wording with `with_methodology`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Methodology {
    pub fees: String,
    pub revenue: String,
    pub supply_side_revenue: String,
}

impl Default for Methodology {
    fn default() -> Self {
        Self {
            fees: "USD total of the fees reported by the indexer for the chain's markets."
                .to_string(),
            revenue: "USD protocol profits reported by the indexer for the chain's markets."
                .to_string(),
            supply_side_revenue:
                "USD liquidity provider profits reported by the indexer for the chain's markets."
                    .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text_names_the_indexer_source() {
        let methodology = Methodology::default();
        assert!(methodology.fees.contains("fees"));
        assert!(methodology.revenue.contains("protocol profits"));
        assert!(methodology.supply_side_revenue.contains("liquidity provider profits"));
    }
}
