//! Configuration types for vcfo-roi

use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// ROI model configuration
///
/// Defaults are the published improvement assumptions; overriding them
/// changes the projection, not the formula shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// How the profit uplift enters the monthly benefit
    #[serde(default)]
    pub profit_basis: ProfitBasis,

    /// Revenue uplift fraction
    #[serde(default = "default_revenue_improvement")]
    pub revenue_improvement: Decimal,

    /// Relative uplift applied to the profit margin
    #[serde(default = "default_profit_margin_improvement")]
    pub profit_margin_improvement: Decimal,

    /// Fraction of stated cash flow issue cost that is recoverable
    #[serde(default = "default_cash_flow_recovery")]
    pub cash_flow_recovery: Decimal,

    /// Fraction of stated bad decision cost that is preventable
    #[serde(default = "default_decision_improvement")]
    pub decision_improvement: Decimal,

    /// Annual benefit growth used for the five-year projection
    #[serde(default = "default_annual_growth_rate")]
    pub annual_growth_rate: Decimal,

    /// Weeks per month used to scale weekly hours
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: Decimal,
}

fn default_revenue_improvement() -> Decimal {
    Decimal::new(15, 2) // 0.15 = 15%
}
fn default_profit_margin_improvement() -> Decimal {
    Decimal::new(20, 2) // 0.20 = 20%
}
fn default_cash_flow_recovery() -> Decimal {
    Decimal::new(80, 2) // 0.80 = 80%
}
fn default_decision_improvement() -> Decimal {
    Decimal::new(70, 2) // 0.70 = 70%
}
fn default_annual_growth_rate() -> Decimal {
    Decimal::new(10, 2) // 0.10 = 10%
}
fn default_weeks_per_month() -> Decimal {
    Decimal::new(433, 2) // 4.33 weeks
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            profit_basis: ProfitBasis::Annual,
            revenue_improvement: Decimal::new(15, 2),       // 15%
            profit_margin_improvement: Decimal::new(20, 2), // 20%
            cash_flow_recovery: Decimal::new(80, 2),        // 80%
            decision_improvement: Decimal::new(70, 2),      // 70%
            annual_growth_rate: Decimal::new(10, 2),        // 10%
            weeks_per_month: Decimal::new(433, 2),          // 4.33
        }
    }
}

/// Basis for folding the profit uplift into the monthly benefit
///
/// `annual` adds the full-year profit delta to the monthly benefit
/// unchanged; `monthly` amortizes the delta over twelve months.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfitBasis {
    #[default]
    Annual,
    Monthly,
}

/// Chart series configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Monthly compounding growth applied to the with-plan curve
    #[serde(default = "default_monthly_growth_rate")]
    pub monthly_growth_rate: Decimal,
}

fn default_monthly_growth_rate() -> Decimal {
    Decimal::new(1, 2) // 0.01 = 1%
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            monthly_growth_rate: Decimal::new(1, 2), // 1%
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
