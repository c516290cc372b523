//! Integration tests for the full scenario pipeline:
//! inputs -> calculation -> chart series -> report envelope

use rust_decimal_macros::dec;
use vcfo_roi::chart::{generate_chart, MONTHS};
use vcfo_roi::config::{ModelConfig, ProfitBasis};
use vcfo_roi::model::{BenefitModel, RoiCalculator, RoiError, RoiInputs};
use vcfo_roi::pricing::{PricingTier, TierId};
use vcfo_roi::report::ScenarioReport;

fn sample_inputs() -> RoiInputs {
    RoiInputs {
        current_revenue: dec!(1000000),
        current_profit: dec!(150000),
        hours_per_week_on_finance: dec!(10),
        hourly_rate: dec!(150),
        missed_opportunities: dec!(5000),
        cash_flow_issues: dec!(3000),
        bad_decisions: dec!(2000),
    }
}

#[test]
fn test_full_pipeline_default_scenario() {
    let inputs = sample_inputs();
    let calculator = RoiCalculator::new();
    let results = calculator.calculate(&inputs, TierId::Growth).unwrap();

    assert_eq!(results.current_profit_margin, dec!(0.15));
    assert_eq!(results.time_value_saved, dec!(6495));
    assert_eq!(results.potential_profit, dec!(207000));
    assert_eq!(results.total_monthly_benefit, dec!(72295));
    assert_eq!(results.total_annual_benefit, dec!(867540));
    assert_eq!(results.five_year_value, dec!(5196568.454));

    let chart = generate_chart(&inputs, &results);
    assert_eq!(chart.len(), 12);
    assert_eq!(chart[0].with_vcfo, dec!(220298));

    let report = ScenarioReport::new(TierId::Growth, inputs, results, chart);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tier"], "growth");
    assert_eq!(json["inputs"]["currentRevenue"], "1000000");
    assert_eq!(json["results"]["totalMonthlyBenefit"], "72295");
    assert_eq!(json["chart"][0]["month"], "Jan");
}

#[test]
fn test_annual_discount_holds_for_all_tiers() {
    for tier in PricingTier::all() {
        assert!(tier.annual < tier.monthly * dec!(12));
    }
}

#[test]
fn test_investment_round_trips_to_tier_table() {
    let calculator = RoiCalculator::new();
    for tier_id in TierId::ALL {
        let results = calculator
            .calculate(&sample_inputs(), tier_id)
            .unwrap();
        let tier = PricingTier::get(tier_id);
        assert_eq!(results.monthly_investment, tier.monthly);
        assert_eq!(results.annual_investment, tier.annual);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let inputs = sample_inputs();
    let calculator = RoiCalculator::new();

    let first = calculator.calculate(&inputs, TierId::Scale).unwrap();
    let second = calculator.calculate(&inputs, TierId::Scale).unwrap();
    assert_eq!(first.total_monthly_benefit, second.total_monthly_benefit);
    assert_eq!(first.annual_roi, second.annual_roi);
    assert_eq!(first.five_year_value, second.five_year_value);

    let chart_a = generate_chart(&inputs, &first);
    let chart_b = generate_chart(&inputs, &second);
    for (a, b) in chart_a.iter().zip(&chart_b) {
        assert_eq!(a.with_vcfo, b.with_vcfo);
    }
}

#[test]
fn test_benefit_strictly_increases_with_hourly_rate() {
    let calculator = RoiCalculator::new();
    let mut previous = None;
    for rate in [50, 100, 150, 250, 500] {
        let mut inputs = sample_inputs();
        inputs.hourly_rate = rate.into();
        let results = calculator.calculate(&inputs, TierId::Growth).unwrap();
        if let Some(prev) = previous {
            assert!(results.total_monthly_benefit > prev);
        }
        previous = Some(results.total_monthly_benefit);
    }
}

#[test]
fn test_zero_finance_hours_boundary() {
    let mut inputs = sample_inputs();
    inputs.hours_per_week_on_finance = dec!(0);
    let results = RoiCalculator::new()
        .calculate(&inputs, TierId::Growth)
        .unwrap();
    assert_eq!(results.time_value_saved, dec!(0));
    // The remaining benefit terms are untouched
    assert_eq!(results.total_monthly_benefit, dec!(65800));
}

#[test]
fn test_chart_baseline_tracks_profit_across_scenarios() {
    let calculator = RoiCalculator::new();
    for profit in [dec!(50000), dec!(150000), dec!(900000)] {
        let mut inputs = sample_inputs();
        inputs.current_profit = profit;
        let results = calculator.calculate(&inputs, TierId::Growth).unwrap();
        let chart = generate_chart(&inputs, &results);
        for (point, month) in chart.iter().zip(MONTHS) {
            assert_eq!(point.month, month);
            assert_eq!(point.without_vcfo, profit);
        }
    }
}

#[test]
fn test_zero_revenue_is_rejected() {
    let mut inputs = sample_inputs();
    inputs.current_revenue = dec!(0);
    let err = RoiCalculator::new()
        .calculate(&inputs, TierId::Growth)
        .unwrap_err();
    assert!(matches!(err, RoiError::NonPositiveRevenue(_)));
}

#[test]
fn test_negative_friction_cost_is_rejected() {
    let mut inputs = sample_inputs();
    inputs.cash_flow_issues = dec!(-100);
    let err = RoiCalculator::new()
        .calculate(&inputs, TierId::Growth)
        .unwrap_err();
    assert!(matches!(err, RoiError::NegativeInput { .. }));
}

#[test]
fn test_no_benefit_is_degenerate() {
    let inputs = RoiInputs {
        current_revenue: dec!(500000),
        current_profit: dec!(0),
        hours_per_week_on_finance: dec!(0),
        hourly_rate: dec!(150),
        missed_opportunities: dec!(0),
        cash_flow_issues: dec!(0),
        bad_decisions: dec!(0),
    };
    let err = RoiCalculator::new()
        .calculate(&inputs, TierId::Growth)
        .unwrap_err();
    assert!(matches!(err, RoiError::DegenerateProjection(_)));
}

#[test]
fn test_monthly_basis_amortizes_profit_uplift() {
    let config = ModelConfig {
        profit_basis: ProfitBasis::Monthly,
        ..ModelConfig::default()
    };
    let annual = RoiCalculator::new()
        .calculate(&sample_inputs(), TierId::Growth)
        .unwrap();
    let monthly = RoiCalculator::from_config(&config)
        .calculate(&sample_inputs(), TierId::Growth)
        .unwrap();

    // Operational savings are identical; only the uplift term shrinks
    assert_eq!(annual.total_monthly_benefit, dec!(72295));
    assert_eq!(monthly.total_monthly_benefit, dec!(20045));
    assert_eq!(
        annual.total_monthly_benefit - monthly.total_monthly_benefit,
        dec!(57000) - dec!(57000) / dec!(12)
    );
}
