//! Projection chart series
//!
//! 12-point month-by-month comparison of a flat baseline against the
//! compounding with-plan curve

use crate::config::ChartConfig;
use crate::model::{RoiInputs, RoiResults};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Calendar month labels; the series always starts at Jan
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month of the projection, in whole currency units
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub month: &'static str,
    /// Flat baseline: current profit with no plan
    pub without_vcfo: Decimal,
    /// Current profit plus the compounding net monthly gain
    pub with_vcfo: Decimal,
}

/// Chart series generator
#[derive(Debug, Clone)]
pub struct ChartGenerator {
    monthly_growth_rate: Decimal,
}

impl ChartGenerator {
    /// Create a generator with the published growth rate
    pub fn new() -> Self {
        Self::from_config(&ChartConfig::default())
    }

    /// Create from ChartConfig
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            monthly_growth_rate: config.monthly_growth_rate,
        }
    }

    /// Generate the 12-month series for a computed projection
    ///
    /// The net monthly gain compounds at the configured rate; both curves
    /// round to whole currency units, midpoints away from zero.
    pub fn generate(&self, inputs: &RoiInputs, results: &RoiResults) -> Vec<ChartPoint> {
        let net_monthly_gain = results.total_monthly_benefit - results.monthly_investment;

        let mut points = Vec::with_capacity(MONTHS.len());
        let mut growth = Decimal::ONE;
        for month in MONTHS {
            let with_vcfo = inputs.current_profit + net_monthly_gain * growth;
            points.push(ChartPoint {
                month,
                without_vcfo: round_currency(inputs.current_profit),
                with_vcfo: round_currency(with_vcfo),
            });
            growth *= Decimal::ONE + self.monthly_growth_rate;
        }
        points
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the series with the published growth rate
pub fn generate_chart(inputs: &RoiInputs, results: &RoiResults) -> Vec<ChartPoint> {
    ChartGenerator::new().generate(inputs, results)
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
