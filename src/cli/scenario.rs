//! Shared scenario flags
//!
//! Defaults mirror the calculator page's initial slider values.

use crate::model::RoiInputs;
use crate::pricing::TierId;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Annual revenue
    #[arg(long, default_value = "1000000")]
    pub revenue: Decimal,

    /// Annual net profit
    #[arg(long, default_value = "150000")]
    pub profit: Decimal,

    /// Hours per week spent on finance work
    #[arg(long, default_value = "10")]
    pub hours_per_week: Decimal,

    /// Value of the owner's time per hour
    #[arg(long, default_value = "150")]
    pub hourly_rate: Decimal,

    /// Estimated monthly revenue lost to missed opportunities
    #[arg(long, default_value = "5000")]
    pub missed_opportunities: Decimal,

    /// Estimated monthly cost of cash flow problems
    #[arg(long, default_value = "3000")]
    pub cash_flow_issues: Decimal,

    /// Estimated monthly cost of poor financial decisions
    #[arg(long, default_value = "2000")]
    pub bad_decisions: Decimal,

    /// Pricing tier
    #[arg(long, value_enum, default_value_t = TierId::Growth)]
    pub tier: TierId,
}

impl ScenarioArgs {
    /// Build calculator inputs from the parsed flags
    pub fn to_inputs(&self) -> RoiInputs {
        RoiInputs {
            current_revenue: self.revenue,
            current_profit: self.profit,
            hours_per_week_on_finance: self.hours_per_week,
            hourly_rate: self.hourly_rate,
            missed_opportunities: self.missed_opportunities,
            cash_flow_issues: self.cash_flow_issues,
            bad_decisions: self.bad_decisions,
        }
    }
}
