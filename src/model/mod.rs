//! ROI model module
//!
//! Translates business metrics into projected benefit, ROI and payback

mod calculator;

pub use calculator::RoiCalculator;

use crate::pricing::TierId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business metrics supplied by the caller
///
/// A transient value object: constructed fresh per calculation, no identity.
/// Revenue and profit are annual figures; the friction costs are monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    /// Annual revenue
    pub current_revenue: Decimal,
    /// Annual net profit
    pub current_profit: Decimal,
    /// Owner hours spent on finance work per week (practical range 0-40)
    pub hours_per_week_on_finance: Decimal,
    /// Value of the owner's time per hour
    pub hourly_rate: Decimal,
    /// Estimated monthly revenue lost to missed opportunities
    pub missed_opportunities: Decimal,
    /// Estimated monthly cost of cash flow problems
    pub cash_flow_issues: Decimal,
    /// Estimated monthly cost of poor financial decisions
    pub bad_decisions: Decimal,
}

impl RoiInputs {
    /// Check domain invariants before calculation
    ///
    /// Revenue must be strictly positive (it is a divisor); every other
    /// field must be non-negative. Profit above revenue is tolerated.
    pub fn validate(&self) -> Result<(), RoiError> {
        if self.current_revenue <= Decimal::ZERO {
            return Err(RoiError::NonPositiveRevenue(self.current_revenue));
        }
        for (field, value) in [
            ("current_profit", self.current_profit),
            ("hours_per_week_on_finance", self.hours_per_week_on_finance),
            ("hourly_rate", self.hourly_rate),
            ("missed_opportunities", self.missed_opportunities),
            ("cash_flow_issues", self.cash_flow_issues),
            ("bad_decisions", self.bad_decisions),
        ] {
            if value < Decimal::ZERO {
                return Err(RoiError::NegativeInput { field, value });
            }
        }
        Ok(())
    }
}

/// Calculated ROI projection
///
/// Ratios are unitless fractions; callers multiply by 100 for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResults {
    /// Current profit / current revenue
    pub current_profit_margin: Decimal,
    /// Monthly value of reclaimed owner time
    pub time_value_saved: Decimal,
    /// Projected annual revenue after improvement
    pub potential_revenue: Decimal,
    /// Projected annual profit after improvement
    pub potential_profit: Decimal,
    /// Projected profit margin after improvement
    pub improved_profit_margin: Decimal,
    /// Combined monthly operational savings and profit uplift
    pub total_monthly_benefit: Decimal,
    /// Monthly benefit scaled to a year
    pub total_annual_benefit: Decimal,
    /// Monthly price of the selected tier
    pub monthly_investment: Decimal,
    /// Annual price of the selected tier
    pub annual_investment: Decimal,
    /// (monthly benefit - monthly investment) / monthly investment
    pub monthly_roi: Decimal,
    /// (annual benefit - annual investment) / annual investment
    pub annual_roi: Decimal,
    /// Months until cumulative benefit covers the monthly investment
    pub payback_period: Decimal,
    /// Cumulative net benefit over 5 years with compounding growth
    pub five_year_value: Decimal,
}

/// ROI model errors
#[derive(Debug, Error)]
pub enum RoiError {
    /// Revenue is a divisor and must be strictly positive
    #[error("current revenue must be positive, got {0}")]
    NonPositiveRevenue(Decimal),
    /// Input below zero where the domain requires non-negative
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput {
        field: &'static str,
        value: Decimal,
    },
    /// Benefit is zero or negative, payback is undefined
    #[error("total monthly benefit {0} supports no payback")]
    DegenerateProjection(Decimal),
}

/// Trait for benefit model implementations
pub trait BenefitModel: Send + Sync {
    /// Calculate the ROI projection for the given inputs and tier
    fn calculate(&self, inputs: &RoiInputs, tier: TierId) -> Result<RoiResults, RoiError>;
}
