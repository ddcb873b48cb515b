//! Risk reduction progression series.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stagegate_core::{Journey, Milestone};

/// One point on the risk reduction journey chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// Compact stage label for chart axes ("Start", "Problem-Solution Fit",
    /// "Unit Economics", ...).
    pub stage_label: String,

    /// Full milestone name; `None` for the synthetic start entry.
    pub full_name: Option<String>,

    /// Months elapsed from the start of the journey through this stage.
    pub cumulative_months: u32,

    /// Composite risk at this stage, as a percentage (0-100).
    pub risk_pct: f64,

    /// Success probability at this stage, as a percentage (0-100).
    pub success_pct: f64,

    /// The milestone's actual achieved flag; `None` for the synthetic start
    /// entry.
    pub achieved: Option<bool>,
}

/// Simulates clearing the milestones in journey order.
///
/// Produces one entry for a synthetic "Start" state (all milestones
/// outstanding, whatever their actual flags) followed by one entry per
/// milestone. The entry at position i shows the composite risk with stages
/// 1..=i cleared and everything later outstanding — a monotonic what-if
/// that is independent of the journey's actual achieved flags. Each
/// milestone entry still carries its real flag for display.
///
/// Always returns exactly `n + 1` entries for `n` milestones. The series is
/// recomputed in full on every call; O(n²) at n = 9 is fine.
///
/// # Example
///
/// ```rust
/// use stagegate_analytics::progression;
/// use stagegate_core::Journey;
///
/// let points = progression(&Journey::seeded());
/// assert_eq!(points.len(), 10);
/// assert_eq!(points[0].stage_label, "Start");
/// assert_eq!(points[9].cumulative_months, 81);
/// ```
#[must_use]
pub fn progression(journey: &Journey) -> Vec<ProgressionPoint> {
    let milestones = journey.milestones();
    let mut points = Vec::with_capacity(milestones.len() + 1);

    let start_risk = hypothetical_risk_pct(milestones, 0);
    points.push(ProgressionPoint {
        stage_label: "Start".to_string(),
        full_name: None,
        cumulative_months: 0,
        risk_pct: start_risk,
        success_pct: 100.0 - start_risk,
        achieved: None,
    });

    let mut cumulative_months = 0;
    for (idx, milestone) in milestones.iter().enumerate() {
        cumulative_months += milestone.months();
        let risk_pct = hypothetical_risk_pct(milestones, idx + 1);
        points.push(ProgressionPoint {
            stage_label: milestone.stage_label(),
            full_name: Some(milestone.name().to_string()),
            cumulative_months,
            risk_pct,
            success_pct: 100.0 - risk_pct,
            achieved: Some(milestone.is_achieved()),
        });
    }

    points
}

/// Composite risk, in percent, with the first `cleared` stages achieved and
/// every later stage outstanding, ignoring actual flags.
fn hypothetical_risk_pct(milestones: &[Milestone], cleared: usize) -> f64 {
    let survival = milestones[cleared..]
        .iter()
        .fold(Decimal::ONE, |acc, m| acc * m.risk().survival());
    let risk = Decimal::ONE - survival;
    (risk * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_entry_count_and_bounds() {
        let journey = Journey::seeded();
        let points = progression(&journey);

        assert_eq!(points.len(), journey.len() + 1);
        assert_eq!(points[0].cumulative_months, 0);
        assert_eq!(points.last().unwrap().cumulative_months, 81);
    }

    #[test]
    fn test_start_entry() {
        let points = progression(&Journey::seeded());
        let start = &points[0];

        assert_eq!(start.stage_label, "Start");
        assert_eq!(start.full_name, None);
        assert_eq!(start.achieved, None);
        assert_relative_eq!(start.risk_pct, 91.673684002, epsilon = 1e-9);
        assert_relative_eq!(start.success_pct, 100.0 - 91.673684002, epsilon = 1e-9);
    }

    #[test]
    fn test_risk_is_non_increasing() {
        let points = progression(&Journey::seeded());
        for pair in points.windows(2) {
            assert!(pair[1].risk_pct <= pair[0].risk_pct);
        }
    }

    #[test]
    fn test_final_entry_fully_cleared() {
        let points = progression(&Journey::seeded());
        let last = points.last().unwrap();

        assert_relative_eq!(last.risk_pct, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.success_pct, 100.0, epsilon = 1e-12);
        assert_eq!(last.full_name.as_deref(), Some("Cash Flow Positive"));
        assert_eq!(last.stage_label, "Cash Flow");
    }

    #[test]
    fn test_cumulative_months_accumulate() {
        let points = progression(&Journey::seeded());
        // Seed durations: 6, 6, 12, 9, 12, 9, 9, 6, 12
        let expected = [0, 6, 12, 24, 33, 45, 54, 63, 69, 81];
        let actual: Vec<u32> = points.iter().map(|p| p.cumulative_months).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_simulation_ignores_actual_flags() {
        let mut journey = Journey::seeded();
        let before = progression(&journey);

        journey.toggle_achieved(5).unwrap();
        let after = progression(&journey);

        // Risk values simulate in-order clearing either way.
        for (b, a) in before.iter().zip(&after) {
            assert_relative_eq!(b.risk_pct, a.risk_pct, epsilon = 1e-12);
        }
        // Only the real achieved flag changes.
        assert_eq!(before[5].achieved, Some(false));
        assert_eq!(after[5].achieved, Some(true));
    }
}
