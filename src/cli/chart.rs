//! Chart command implementation

use super::scenario::ScenarioArgs;
use crate::chart::ChartGenerator;
use crate::config::Config;
use crate::model::{BenefitModel, RoiCalculator};
use crate::report;
use clap::Args;

#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Emit the series as JSON
    #[arg(long)]
    pub json: bool,
}

impl ChartArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let inputs = self.scenario.to_inputs();
        let results = RoiCalculator::from_config(&config.model)
            .calculate(&inputs, self.scenario.tier)?;
        let points = ChartGenerator::from_config(&config.chart).generate(&inputs, &results);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            println!("{:<6} {:>14} {:>14}", "MONTH", "WITHOUT", "WITH");
            for point in &points {
                println!(
                    "{:<6} {:>14} {:>14}",
                    point.month,
                    report::format_currency(point.without_vcfo),
                    report::format_currency(point.with_vcfo)
                );
            }
        }

        Ok(())
    }
}
