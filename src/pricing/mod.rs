//! Pricing tier table
//!
//! Read-only mapping of service plan -> monthly/annual price and feature list

use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Service plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TierId {
    /// Entry plan for owner-operators
    Starter,
    /// Mid plan with weekly cadence
    Growth,
    /// Top plan with dedicated support
    Scale,
}

impl TierId {
    /// All tiers in ascending price order
    pub const ALL: [TierId; 3] = [TierId::Starter, TierId::Growth, TierId::Scale];

    /// Lowercase plan name
    pub fn name(&self) -> &'static str {
        match self {
            TierId::Starter => "starter",
            TierId::Growth => "growth",
            TierId::Scale => "scale",
        }
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A pricing tier with fixed prices and display features
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricingTier {
    /// Plan identifier
    pub id: TierId,
    /// Monthly price in whole dollars
    pub monthly: Decimal,
    /// Annual price in whole dollars (~2 months free vs monthly billing)
    pub annual: Decimal,
    /// Display-only feature list, not consumed by calculations
    pub features: &'static [&'static str],
}

impl PricingTier {
    /// Look up the tier for a plan identifier
    pub fn get(id: TierId) -> PricingTier {
        match id {
            TierId::Starter => PricingTier {
                id,
                monthly: dec!(997),
                annual: dec!(9970),
                features: &[
                    "Monthly Financial Review",
                    "Cash Flow Forecasting",
                    "Basic KPI Dashboard",
                ],
            },
            TierId::Growth => PricingTier {
                id,
                monthly: dec!(1997),
                annual: dec!(19970),
                features: &[
                    "Weekly Financial Review",
                    "Advanced Forecasting",
                    "Custom KPI Dashboard",
                    "Quarterly Strategy Sessions",
                ],
            },
            TierId::Scale => PricingTier {
                id,
                monthly: dec!(3997),
                annual: dec!(39970),
                features: &[
                    "Dedicated CFO Support",
                    "Real-time Dashboards",
                    "Board-Ready Reporting",
                    "M&A Support",
                ],
            },
        }
    }

    /// All tiers in ascending price order
    pub fn all() -> [PricingTier; 3] {
        TierId::ALL.map(PricingTier::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers() {
        assert_eq!(PricingTier::all().len(), 3);
    }

    #[test]
    fn test_annual_discount_invariant() {
        // Annual billing must always undercut 12 months of monthly billing
        for tier in PricingTier::all() {
            assert!(
                tier.annual < tier.monthly * dec!(12),
                "tier {} has no annual discount",
                tier.id
            );
        }
    }

    #[test]
    fn test_growth_prices() {
        let tier = PricingTier::get(TierId::Growth);
        assert_eq!(tier.monthly, dec!(1997));
        assert_eq!(tier.annual, dec!(19970));
    }

    #[test]
    fn test_prices_ascending() {
        let [starter, growth, scale] = PricingTier::all();
        assert!(starter.monthly < growth.monthly);
        assert!(growth.monthly < scale.monthly);
    }

    #[test]
    fn test_features_nonempty() {
        for tier in PricingTier::all() {
            assert!(!tier.features.is_empty());
        }
    }

    #[test]
    fn test_tier_id_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TierId::Starter).unwrap(), "\"starter\"");
        let parsed: TierId = serde_json::from_str("\"scale\"").unwrap();
        assert_eq!(parsed, TierId::Scale);
    }

    #[test]
    fn test_tier_id_display() {
        assert_eq!(TierId::Growth.to_string(), "growth");
    }
}
