//! Calculate command implementation

use super::scenario::ScenarioArgs;
use crate::chart::ChartGenerator;
use crate::config::Config;
use crate::model::{BenefitModel, RoiCalculator};
use crate::report::{self, ScenarioReport};
use clap::Args;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Emit the full scenario report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let inputs = self.scenario.to_inputs();
        let calculator = RoiCalculator::from_config(&config.model);
        let results = calculator.calculate(&inputs, self.scenario.tier)?;
        tracing::info!(tier = %self.scenario.tier, "scenario calculated");

        if self.json {
            let chart =
                ChartGenerator::from_config(&config.chart).generate(&inputs, &results);
            let scenario = ScenarioReport::new(self.scenario.tier, inputs, results, chart);
            println!("{}", serde_json::to_string_pretty(&scenario)?);
        } else {
            println!(
                "{}",
                report::format_summary(self.scenario.tier, &inputs, &results)
            );
        }

        Ok(())
    }
}
