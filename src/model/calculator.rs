//! ROI calculation
//!
//! Deterministic benefit/ROI/payback projection:
//! margin uplift and time savings plus partially-weighted friction
//! recoveries, priced against a service tier.

use super::{BenefitModel, RoiError, RoiInputs, RoiResults};
use crate::config::{ModelConfig, ProfitBasis};
use crate::pricing::{PricingTier, TierId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// ROI calculator driven by improvement assumptions
#[derive(Debug, Clone)]
pub struct RoiCalculator {
    config: ModelConfig,
}

impl RoiCalculator {
    /// Create a calculator with the published assumptions
    pub fn new() -> Self {
        Self {
            config: ModelConfig::default(),
        }
    }

    /// Create from ModelConfig
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Default for RoiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BenefitModel for RoiCalculator {
    fn calculate(&self, inputs: &RoiInputs, tier: TierId) -> Result<RoiResults, RoiError> {
        inputs.validate()?;
        let cfg = &self.config;

        let current_profit_margin = inputs.current_profit / inputs.current_revenue;

        // Owner time reclaimed, valued at the stated hourly rate
        let monthly_hours_saved = inputs.hours_per_week_on_finance * cfg.weeks_per_month;
        let time_value_saved = monthly_hours_saved * inputs.hourly_rate;

        // Improved state: revenue uplift plus a relative margin uplift
        let potential_revenue =
            inputs.current_revenue * (Decimal::ONE + cfg.revenue_improvement);
        let improved_profit_margin =
            current_profit_margin * (Decimal::ONE + cfg.profit_margin_improvement);
        let potential_profit = potential_revenue * improved_profit_margin;

        // Friction recoveries: missed opportunities count at full weight,
        // cash flow and decision costs at their recovery fractions
        let monthly_operational_savings = time_value_saved
            + inputs.cash_flow_issues * cfg.cash_flow_recovery
            + inputs.bad_decisions * cfg.decision_improvement
            + inputs.missed_opportunities;

        let profit_increase = potential_profit - inputs.current_profit;
        let monthly_profit_increase = match cfg.profit_basis {
            ProfitBasis::Annual => profit_increase,
            ProfitBasis::Monthly => profit_increase / dec!(12),
        };

        let total_monthly_benefit = monthly_operational_savings + monthly_profit_increase;
        if total_monthly_benefit <= Decimal::ZERO {
            return Err(RoiError::DegenerateProjection(total_monthly_benefit));
        }
        let total_annual_benefit = total_monthly_benefit * dec!(12);

        let pricing = PricingTier::get(tier);
        let monthly_investment = pricing.monthly;
        let annual_investment = pricing.annual;

        let monthly_roi = (total_monthly_benefit - monthly_investment) / monthly_investment;
        let annual_roi = (total_annual_benefit - annual_investment) / annual_investment;
        let payback_period = monthly_investment / total_monthly_benefit;

        // Five-year value: annual benefit compounds, investment recurs flat
        let mut five_year_value = Decimal::ZERO;
        let mut year_benefit = total_annual_benefit;
        for _year in 0..5 {
            five_year_value += year_benefit - annual_investment;
            year_benefit *= Decimal::ONE + cfg.annual_growth_rate;
        }

        tracing::debug!(
            %tier,
            %total_monthly_benefit,
            %annual_roi,
            "computed projection"
        );

        Ok(RoiResults {
            current_profit_margin,
            time_value_saved,
            potential_revenue,
            potential_profit,
            improved_profit_margin,
            total_monthly_benefit,
            total_annual_benefit,
            monthly_investment,
            annual_investment,
            monthly_roi,
            annual_roi,
            payback_period,
            five_year_value,
        })
    }
}
