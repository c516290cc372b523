use clap::Parser;
use rust_decimal_macros::dec;
use vcfo_roi::cli::{Cli, Commands};
use vcfo_roi::config::Config;
use vcfo_roi::pricing::PricingTier;
use vcfo_roi::report::format_currency;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    vcfo_roi::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Calculate(args) => {
            tracing::info!("Calculating ROI scenario");
            args.execute(&config)?;
        }
        Commands::Chart(args) => {
            tracing::info!("Generating projection series");
            args.execute(&config)?;
        }
        Commands::Tiers => {
            println!("Pricing tiers:");
            for tier in PricingTier::all() {
                println!(
                    "  {:<8} {}/mo  {}/yr",
                    tier.id,
                    format_currency(tier.monthly),
                    format_currency(tier.annual)
                );
                for feature in tier.features {
                    println!("           - {feature}");
                }
            }
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Profit basis: {:?}", config.model.profit_basis);
            println!(
                "  Revenue improvement: {}%",
                config.model.revenue_improvement * dec!(100)
            );
            println!(
                "  Margin improvement: {}%",
                config.model.profit_margin_improvement * dec!(100)
            );
            println!(
                "  Cash flow recovery: {}%",
                config.model.cash_flow_recovery * dec!(100)
            );
            println!(
                "  Decision improvement: {}%",
                config.model.decision_improvement * dec!(100)
            );
            println!(
                "  Annual growth: {}%",
                config.model.annual_growth_rate * dec!(100)
            );
            println!(
                "  Chart monthly growth: {}%",
                config.chart.monthly_growth_rate * dec!(100)
            );
        }
    }

    Ok(())
}
