//! Journey analytics summary.
//!
//! Provides a comprehensive analytics summary combining all metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stagegate_core::Journey;

use crate::funding::FundingStage;
use crate::metrics::{
    composite_risk, implied_irr, remaining_months, required_multiple, success_probability,
};
use crate::multiple::RequiredMultiple;

/// Comprehensive journey analytics.
///
/// Contains all derived metrics for a journey in a single struct. This is
/// the primary output consumed by a dashboard after each mutation; it is
/// recomputed from scratch, never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyAnalytics {
    /// Number of milestones in the journey.
    pub milestone_count: usize,

    /// Number of achieved milestones.
    pub achieved_count: usize,

    /// Probability that at least one remaining milestone fails.
    pub composite_risk: Decimal,

    /// Joint probability that every remaining milestone succeeds.
    pub success_probability: Decimal,

    /// Break-even return multiple for an investor entering now.
    pub required_multiple: RequiredMultiple,

    /// Expected months to clear the remaining milestones.
    pub remaining_months: u32,

    /// Remaining horizon in years.
    pub remaining_years: f64,

    /// Annualized rate implied by the required multiple over the remaining
    /// horizon, as a percentage. Zero when the rate is undefined (no
    /// horizon or unbacked multiple).
    pub implied_irr_pct: f64,

    /// Total journey duration across all milestones, in months.
    pub total_months: u32,

    /// Summed duration of achieved milestones, in months.
    pub months_of_progress: u32,

    /// Typical funding stage for the current progress.
    pub funding_stage: FundingStage,
}

impl JourneyAnalytics {
    /// Calculates complete analytics for a journey.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stagegate_analytics::JourneyAnalytics;
    /// use stagegate_core::Journey;
    ///
    /// let analytics = JourneyAnalytics::calculate(&Journey::seeded());
    /// assert_eq!(analytics.remaining_months, 81);
    /// assert_eq!(
    ///     analytics.composite_risk + analytics.success_probability,
    ///     rust_decimal::Decimal::ONE,
    /// );
    /// ```
    #[must_use]
    pub fn calculate(journey: &Journey) -> Self {
        let milestones = journey.milestones();
        let success_probability = success_probability(milestones);
        let required_multiple = required_multiple(success_probability);
        let remaining_months = remaining_months(milestones);
        let achieved_count = journey.achieved_count();

        Self {
            milestone_count: journey.len(),
            achieved_count,
            composite_risk: composite_risk(milestones),
            success_probability,
            required_multiple,
            remaining_months,
            remaining_years: f64::from(remaining_months) / 12.0,
            implied_irr_pct: implied_irr(required_multiple, remaining_months),
            total_months: journey.total_months(),
            months_of_progress: journey.months_of_progress(),
            funding_stage: FundingStage::from_achieved_count(achieved_count),
        }
    }
}
