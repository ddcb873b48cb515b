//! Journey representation and mutation operations.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StagegateError, StagegateResult};
use crate::seed;
use crate::types::{Milestone, StageRisk};

/// An ordered startup de-risking journey.
///
/// Owns the milestone list for a session. The list is a fixed-size registry:
/// milestones are mutated in place (achieved flag, risk, duration) but never
/// added or removed after construction. All derived metrics are recomputed
/// from the current list by the analytics layer; nothing here caches.
///
/// # Example
///
/// ```rust
/// use stagegate_core::Journey;
/// use rust_decimal_macros::dec;
///
/// let mut journey = Journey::seeded();
/// journey.toggle_achieved(1)?;
/// journey.set_risk(2, dec!(0.30))?;
/// assert_eq!(journey.achieved_count(), 1);
/// # Ok::<(), stagegate_core::StagegateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    milestones: Vec<Milestone>,
}

impl Journey {
    /// Builds the standard nine-milestone journey from the seed dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            milestones: seed::standard_milestones(),
        }
    }

    /// Creates a journey from an explicit milestone list.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::InvalidJourney` if the list is empty or the
    /// identifiers are not strictly ascending, and propagates any range
    /// violation in the milestones themselves.
    pub fn new(milestones: Vec<Milestone>) -> StagegateResult<Self> {
        if milestones.is_empty() {
            return Err(StagegateError::invalid_journey("no milestones"));
        }
        for pair in milestones.windows(2) {
            if pair[1].id() <= pair[0].id() {
                return Err(StagegateError::invalid_journey(format!(
                    "milestone ids must be strictly ascending, found #{} after #{}",
                    pair[1].id(),
                    pair[0].id()
                )));
            }
        }
        for milestone in &milestones {
            milestone.validate()?;
        }
        Ok(Self { milestones })
    }

    /// Returns the milestones in journey order.
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Returns the number of milestones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    /// Returns true if the journey has no milestones.
    ///
    /// Never true for a constructed journey; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Returns the milestone with the given identifier.
    #[must_use]
    pub fn get(&self, id: u8) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id() == id)
    }

    fn get_mut(&mut self, id: u8) -> StagegateResult<&mut Milestone> {
        self.milestones
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(StagegateError::MilestoneNotFound { id })
    }

    /// Flips the achieved flag of the milestone with the given identifier,
    /// returning the new flag.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::MilestoneNotFound` for an unknown id.
    pub fn toggle_achieved(&mut self, id: u8) -> StagegateResult<bool> {
        let milestone = self.get_mut(id)?;
        let achieved = milestone.toggle_achieved();
        debug!("milestone #{id} achieved = {achieved}");
        Ok(achieved)
    }

    /// Replaces the risk of the milestone with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::RiskOutOfRange` if `risk` falls outside
    /// `[0.05, 0.60]` (the stored value is unchanged), or
    /// `MilestoneNotFound` for an unknown id.
    pub fn set_risk(&mut self, id: u8, risk: Decimal) -> StagegateResult<()> {
        let risk = StageRisk::new(risk)?;
        let milestone = self.get_mut(id)?;
        milestone.set_risk(risk);
        debug!("milestone #{id} risk = {risk}");
        Ok(())
    }

    /// Replaces the duration of the milestone with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::MonthsOutOfRange` if `months` falls outside
    /// `[1, 36]` (the stored value is unchanged), or `MilestoneNotFound`
    /// for an unknown id.
    pub fn set_months(&mut self, id: u8, months: u32) -> StagegateResult<()> {
        let milestone = self.get_mut(id)?;
        milestone.set_months(months)?;
        debug!("milestone #{id} months = {months}");
        Ok(())
    }

    /// Returns the number of achieved milestones.
    #[must_use]
    pub fn achieved_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.is_achieved()).count()
    }

    /// Returns true if every milestone is achieved.
    #[must_use]
    pub fn is_fully_achieved(&self) -> bool {
        self.milestones.iter().all(Milestone::is_achieved)
    }

    /// Returns the total journey duration across all milestones, in months.
    #[must_use]
    pub fn total_months(&self) -> u32 {
        self.milestones.iter().map(Milestone::months).sum()
    }

    /// Returns the months of progress: the summed duration of achieved
    /// milestones.
    #[must_use]
    pub fn months_of_progress(&self) -> u32 {
        self.milestones
            .iter()
            .filter(|m| m.is_achieved())
            .map(Milestone::months)
            .sum()
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::seeded()
    }
}
