//! Composite risk, required multiple, and IRR calculations.
//!
//! Stage failures are modeled as independent go/no-go events: the journey
//! succeeds only if every remaining stage succeeds, so the joint success
//! probability is the product of per-stage survivals. Achieving a milestone
//! permanently removes its risk contribution.
//!
//! Probability arithmetic stays in [`Decimal`], which keeps the identity
//! `composite_risk + success_probability == 1` exact. Only the IRR power
//! step goes through `f64`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use stagegate_core::Milestone;

use crate::multiple::RequiredMultiple;

/// Joint probability that every unachieved milestone succeeds.
///
/// `P(success) = ∏ (1 - risk_i)` over unachieved milestones; `1` when none
/// remain.
pub fn success_probability<'a, I>(milestones: I) -> Decimal
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones
        .into_iter()
        .filter(|m| !m.is_achieved())
        .fold(Decimal::ONE, |acc, m| acc * m.risk().survival())
}

/// Probability that at least one unachieved milestone fails.
///
/// `Composite Risk = 1 - ∏ (1 - risk_i)` over unachieved milestones; `0`
/// when all milestones are achieved (fully de-risked).
pub fn composite_risk<'a, I>(milestones: I) -> Decimal
where
    I: IntoIterator<Item = &'a Milestone>,
{
    Decimal::ONE - success_probability(milestones)
}

/// Expected months to clear the unachieved milestones.
pub fn remaining_months<'a, I>(milestones: I) -> u32
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones
        .into_iter()
        .filter(|m| !m.is_achieved())
        .map(Milestone::months)
        .sum()
}

/// Break-even return multiple for the given success probability.
///
/// `Required Multiple = 1 / P(success)` when the probability is positive;
/// [`RequiredMultiple::Unbacked`] when it is zero.
#[must_use]
pub fn required_multiple(success_probability: Decimal) -> RequiredMultiple {
    if success_probability > Decimal::ZERO {
        RequiredMultiple::Finite(Decimal::ONE / success_probability)
    } else {
        RequiredMultiple::Unbacked
    }
}

/// Annualized rate implied by achieving the required multiple over the
/// remaining horizon, as a percentage.
///
/// `IRR = (Multiple ^ (12 / remaining_months) - 1) × 100`
///
/// Returns `0.0` when the horizon is zero or the multiple is unbacked.
/// That zero is a sentinel for "rate undefined", not "no risk"; callers
/// must not read it as a riskless journey. The raw value is returned
/// uncapped — short horizons against large multiples legitimately produce
/// triple-digit percentages.
#[must_use]
pub fn implied_irr(multiple: RequiredMultiple, remaining_months: u32) -> f64 {
    let Some(value) = multiple.value() else {
        return 0.0;
    };
    if remaining_months == 0 {
        return 0.0;
    }
    let remaining_years = f64::from(remaining_months) / 12.0;
    let multiple = value.to_f64().unwrap_or(0.0);
    (multiple.powf(1.0 / remaining_years) - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use stagegate_core::Journey;

    #[test]
    fn test_success_probability_seed() {
        let journey = Journey::seeded();
        // 0.60 × 0.65 × 0.70 × 0.75 × 0.78 × 0.82 × 0.85 × 0.85 × 0.88
        assert_eq!(
            success_probability(journey.milestones()),
            dec!(0.08326315998)
        );
    }

    #[test]
    fn test_composite_risk_seed() {
        let journey = Journey::seeded();
        assert_eq!(composite_risk(journey.milestones()), dec!(0.91673684002));
    }

    #[test]
    fn test_risk_and_success_sum_to_one() {
        let mut journey = Journey::seeded();
        journey.toggle_achieved(1).unwrap();
        journey.toggle_achieved(4).unwrap();
        let milestones = journey.milestones();
        assert_eq!(
            composite_risk(milestones) + success_probability(milestones),
            Decimal::ONE
        );
    }

    #[test]
    fn test_fully_achieved_is_zero_risk() {
        let mut journey = Journey::seeded();
        for id in 1..=9 {
            journey.toggle_achieved(id).unwrap();
        }
        assert_eq!(composite_risk(journey.milestones()), Decimal::ZERO);
        assert_eq!(success_probability(journey.milestones()), Decimal::ONE);
        assert_eq!(remaining_months(journey.milestones()), 0);
    }

    #[test]
    fn test_achieving_reduces_risk() {
        let mut journey = Journey::seeded();
        let before = composite_risk(journey.milestones());
        journey.toggle_achieved(1).unwrap();
        let after = composite_risk(journey.milestones());
        assert!(after < before);
    }

    #[test]
    fn test_remaining_months_seed() {
        let mut journey = Journey::seeded();
        assert_eq!(remaining_months(journey.milestones()), 81);
        journey.toggle_achieved(3).unwrap();
        assert_eq!(remaining_months(journey.milestones()), 69);
    }

    #[test]
    fn test_required_multiple() {
        assert_eq!(
            required_multiple(dec!(0.5)),
            RequiredMultiple::Finite(dec!(2))
        );
        assert_eq!(
            required_multiple(Decimal::ONE),
            RequiredMultiple::Finite(Decimal::ONE)
        );
        assert_eq!(required_multiple(Decimal::ZERO), RequiredMultiple::Unbacked);
    }

    #[test]
    fn test_required_multiple_seed() {
        let journey = Journey::seeded();
        let multiple = required_multiple(success_probability(journey.milestones()));
        let value = multiple.value().unwrap().to_f64().unwrap();
        assert_relative_eq!(value, 12.0101, max_relative = 0.001);
    }

    #[test]
    fn test_implied_irr_seed() {
        // 12.01x over 6.75 years
        let journey = Journey::seeded();
        let multiple = required_multiple(success_probability(journey.milestones()));
        let irr = implied_irr(multiple, remaining_months(journey.milestones()));
        assert_relative_eq!(irr, 44.52, max_relative = 0.01);
    }

    #[test]
    fn test_implied_irr_sentinels() {
        // No time horizon left
        assert_eq!(implied_irr(RequiredMultiple::Finite(dec!(2)), 0), 0.0);
        // No feasible return
        assert_eq!(implied_irr(RequiredMultiple::Unbacked, 12), 0.0);
    }

    #[test]
    fn test_implied_irr_doubles_in_a_year() {
        let irr = implied_irr(RequiredMultiple::Finite(dec!(2)), 12);
        assert_relative_eq!(irr, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_implied_irr_uncapped() {
        // 10x over 6 months annualizes to 9,900%
        let irr = implied_irr(RequiredMultiple::Finite(dec!(10)), 6);
        assert_relative_eq!(irr, 9_900.0, max_relative = 1e-6);
    }
}
