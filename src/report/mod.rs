//! Scenario reporting
//!
//! Formatted CLI summary and the JSON report envelope

use crate::chart::ChartPoint;
use crate::model::{RoiInputs, RoiResults};
use crate::pricing::TierId;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Complete scenario output for machine consumption
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Selected pricing tier
    pub tier: TierId,
    /// Business metrics the projection was computed from
    pub inputs: RoiInputs,
    /// Computed projection
    pub results: RoiResults,
    /// 12-month chart series
    pub chart: Vec<ChartPoint>,
}

impl ScenarioReport {
    /// Assemble a report for a computed scenario
    pub fn new(
        tier: TierId,
        inputs: RoiInputs,
        results: RoiResults,
        chart: Vec<ChartPoint>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            tier,
            inputs,
            results,
            chart,
        }
    }
}

/// Format a currency amount as whole dollars with thousands separators
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let raw = rounded.abs().to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, digit) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a unitless ratio as a percentage with one decimal
pub fn format_percent(ratio: Decimal) -> String {
    let pct = (ratio * dec!(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.1}%")
}

/// Format a payback period, switching to days under one month
pub fn format_payback(months: Decimal) -> String {
    if months < Decimal::ONE {
        let days = (months * dec!(30))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if days == Decimal::ONE {
            "1 day".to_string()
        } else {
            format!("{days} days")
        }
    } else {
        let rounded =
            months.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.1} months")
    }
}

/// Format a computed scenario as a table for CLI output
pub fn format_summary(tier: TierId, inputs: &RoiInputs, results: &RoiResults) -> String {
    let net_monthly_gain = results.total_monthly_benefit - results.monthly_investment;
    let net_annual_gain = results.total_annual_benefit - results.annual_investment;
    let annual_profit_uplift = results.potential_profit - inputs.current_profit;

    format!(
        r#"
══════════════════════════════════════════════════════
               ROI PROJECTION ({tier})
══════════════════════════════════════════════════════

HEADLINE
───────────────────────────────────────────────────────
Annual ROI:       {}
Payback Period:   {}
5-Year Value:     {}

MONTHLY
───────────────────────────────────────────────────────
Time Value Saved:     {}
Total Benefit:        {}
Investment:           {}
Net Gain:             {}

ANNUAL
───────────────────────────────────────────────────────
Current Margin:       {}
Improved Margin:      {}
Profit Uplift:        {}
Total Benefit:        {}
Investment:           {}
Net Gain:             {}
══════════════════════════════════════════════════════
"#,
        format_percent(results.annual_roi),
        format_payback(results.payback_period),
        format_currency(results.five_year_value),
        format_currency(results.time_value_saved),
        format_currency(results.total_monthly_benefit),
        format_currency(results.monthly_investment),
        format_currency(net_monthly_gain),
        format_percent(results.current_profit_margin),
        format_percent(results.improved_profit_margin),
        format_currency(annual_profit_uplift),
        format_currency(results.total_annual_benefit),
        format_currency(results.annual_investment),
        format_currency(net_annual_gain),
    )
}
