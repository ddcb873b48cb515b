//! End-to-end scenarios over the standard nine-milestone journey.
//!
//! These drive the journey the way a dashboard session would - toggling
//! milestones and adjusting parameters - and check the derived metrics
//! against hand-computed values from the seed dataset.

use approx::assert_relative_eq;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stagegate_analytics::{progression, JourneyAnalytics, RequiredMultiple};
use stagegate_core::{Journey, StagegateError};

#[test]
fn fresh_journey_carries_full_risk() {
    let analytics = JourneyAnalytics::calculate(&Journey::seeded());

    // Survival = 0.60 × 0.65 × 0.70 × 0.75 × 0.78 × 0.82 × 0.85 × 0.85 × 0.88
    assert_eq!(analytics.success_probability, dec!(0.08326315998));
    assert_eq!(analytics.composite_risk, dec!(0.91673684002));
    assert_eq!(
        analytics.composite_risk + analytics.success_probability,
        Decimal::ONE
    );

    assert_eq!(analytics.remaining_months, 81);
    assert_relative_eq!(analytics.remaining_years, 6.75, epsilon = 1e-12);

    let multiple = analytics.required_multiple.value().unwrap();
    assert_relative_eq!(multiple.to_f64().unwrap(), 12.0101, max_relative = 0.001);
    assert_relative_eq!(analytics.implied_irr_pct, 44.52, max_relative = 0.01);
}

#[test]
fn fully_achieved_journey_is_degenerate() {
    let mut journey = Journey::seeded();
    for id in 1..=9 {
        journey.toggle_achieved(id).unwrap();
    }
    let analytics = JourneyAnalytics::calculate(&journey);

    assert_eq!(analytics.composite_risk, Decimal::ZERO);
    assert_eq!(
        analytics.required_multiple,
        RequiredMultiple::Finite(Decimal::ONE)
    );
    assert_eq!(analytics.remaining_months, 0);
    assert_eq!(analytics.implied_irr_pct, 0.0);
}

#[test]
fn early_stage_progress_scenario() {
    let mut journey = Journey::seeded();
    for id in 1..=3 {
        journey.toggle_achieved(id).unwrap();
    }
    let analytics = JourneyAnalytics::calculate(&journey);

    // Remaining survival = 0.75 × 0.78 × 0.82 × 0.85 × 0.85 × 0.88
    assert_eq!(analytics.success_probability, dec!(0.3049932600));
    assert_eq!(analytics.remaining_months, 57);
    assert_eq!(analytics.achieved_count, 3);
    assert_eq!(analytics.funding_stage.to_string(), "Seed");

    let multiple = analytics.required_multiple.value().unwrap();
    assert_relative_eq!(multiple.to_f64().unwrap(), 3.2788, max_relative = 0.001);
    assert_relative_eq!(analytics.implied_irr_pct, 28.40, max_relative = 0.01);
}

#[test]
fn rejected_risk_leaves_metrics_unchanged() {
    let mut journey = Journey::seeded();
    let before = JourneyAnalytics::calculate(&journey);

    let err = journey.set_risk(1, dec!(0.70)).unwrap_err();
    assert!(matches!(err, StagegateError::RiskOutOfRange { .. }));
    assert_eq!(journey.get(1).unwrap().risk().value(), dec!(0.40));

    let after = JourneyAnalytics::calculate(&journey);
    assert_eq!(after, before);
}

#[test]
fn toggle_twice_restores_metrics() {
    let mut journey = Journey::seeded();
    let before = JourneyAnalytics::calculate(&journey);

    journey.toggle_achieved(3).unwrap();
    assert_ne!(JourneyAnalytics::calculate(&journey), before);

    journey.toggle_achieved(3).unwrap();
    assert_eq!(JourneyAnalytics::calculate(&journey), before);
}

#[test]
fn raising_a_stage_risk_raises_composite_risk() {
    let mut journey = Journey::seeded();
    let before = JourneyAnalytics::calculate(&journey).composite_risk;

    journey.set_risk(9, dec!(0.60)).unwrap();
    let after = JourneyAnalytics::calculate(&journey).composite_risk;

    assert!(after > before);
}

#[test]
fn shortening_the_horizon_raises_the_irr() {
    let mut journey = Journey::seeded();
    let before = JourneyAnalytics::calculate(&journey).implied_irr_pct;

    for id in 1..=9 {
        journey.set_months(id, 1).unwrap();
    }
    let after = JourneyAnalytics::calculate(&journey).implied_irr_pct;

    // Same multiple compressed into 9 months instead of 81.
    assert!(after > before);
    assert!(after > 999.0);
}

#[test]
fn progression_tracks_the_reconfigured_journey() {
    let mut journey = Journey::seeded();
    journey.set_months(1, 3).unwrap();
    journey.set_risk(1, dec!(0.50)).unwrap();

    let points = progression(&journey);
    assert_eq!(points.len(), 10);
    assert_eq!(points[1].cumulative_months, 3);
    assert_eq!(points.last().unwrap().cumulative_months, 78);

    // Start risk reflects the raised stage risk:
    // survival = 0.50 × 0.65 × ... instead of 0.60 × 0.65 × ...
    let survival = dec!(0.08326315998) / dec!(0.60) * dec!(0.50);
    let expected = (Decimal::ONE_HUNDRED * (Decimal::ONE - survival))
        .to_f64()
        .unwrap();
    assert_relative_eq!(points[0].risk_pct, expected, epsilon = 1e-9);
}
