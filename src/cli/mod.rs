//! CLI interface for vcfo-roi
//!
//! Provides subcommands for:
//! - `calculate`: Compute the ROI projection for a scenario
//! - `chart`: Print the 12-month projection series
//! - `tiers`: Show the pricing table
//! - `config`: Show resolved configuration

mod calculate;
mod chart;
mod scenario;

pub use calculate::CalculateArgs;
pub use chart::ChartArgs;
pub use scenario::ScenarioArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vcfo-roi")]
#[command(about = "ROI and payback modeling engine for virtual CFO service tiers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the ROI projection for a scenario
    Calculate(CalculateArgs),
    /// Print the 12-month projection series
    Chart(ChartArgs),
    /// Show the pricing table
    Tiers,
    /// Show resolved configuration
    Config,
}
