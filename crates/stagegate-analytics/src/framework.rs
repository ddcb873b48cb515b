//! Breakdowns over the milestone classification axes.
//!
//! The framework view groups milestones by assessment criterion and by
//! business model. All functions are pure - they read the journey and
//! return aggregate structs without modifying state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stagegate_core::{Assessment, BusinessModel, Journey, Milestone};

use crate::metrics::composite_risk;

/// Aggregate for one assessment criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentBreakdown {
    /// The criterion this group covers.
    pub assessment: Assessment,

    /// Identifiers of the milestones in this group, in journey order.
    pub milestone_ids: Vec<u8>,

    /// How many of the group's milestones are achieved.
    pub achieved_count: usize,

    /// Composite risk of the group's unachieved milestones; zero when the
    /// group is empty or fully achieved.
    pub remaining_risk: Decimal,
}

impl AssessmentBreakdown {
    /// Returns the number of milestones in this group.
    #[must_use]
    pub fn milestone_count(&self) -> usize {
        self.milestone_ids.len()
    }

    /// Returns true if every milestone in the group is achieved.
    #[must_use]
    pub fn is_fully_achieved(&self) -> bool {
        self.achieved_count == self.milestone_ids.len()
    }
}

/// Aggregate for one business model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBreakdown {
    /// The business model this group covers.
    pub model: BusinessModel,

    /// Identifiers of the milestones in this group, in journey order.
    pub milestone_ids: Vec<u8>,

    /// How many of the group's milestones are achieved.
    pub achieved_count: usize,

    /// Composite risk of the group's unachieved milestones; zero when the
    /// group is empty or fully achieved.
    pub remaining_risk: Decimal,
}

impl ModelBreakdown {
    /// Returns the number of milestones in this group.
    #[must_use]
    pub fn milestone_count(&self) -> usize {
        self.milestone_ids.len()
    }

    /// Returns true if every milestone in the group is achieved.
    #[must_use]
    pub fn is_fully_achieved(&self) -> bool {
        self.achieved_count == self.milestone_ids.len()
    }
}

/// Groups the journey by assessment criterion.
///
/// Returns one entry per [`Assessment`] variant in canonical order, so the
/// caller can render a fixed grid without checking for missing groups.
#[must_use]
pub fn by_assessment(journey: &Journey) -> Vec<AssessmentBreakdown> {
    Assessment::all()
        .into_iter()
        .map(|assessment| {
            let group: Vec<&Milestone> = journey
                .milestones()
                .iter()
                .filter(|m| m.assessment() == assessment)
                .collect();
            AssessmentBreakdown {
                assessment,
                milestone_ids: group.iter().map(|m| m.id()).collect(),
                achieved_count: group.iter().filter(|m| m.is_achieved()).count(),
                remaining_risk: composite_risk(group.iter().copied()),
            }
        })
        .collect()
}

/// Groups the journey by business model.
///
/// Returns one entry per [`BusinessModel`] variant in canonical order.
#[must_use]
pub fn by_business_model(journey: &Journey) -> Vec<ModelBreakdown> {
    BusinessModel::all()
        .into_iter()
        .map(|model| {
            let group: Vec<&Milestone> = journey
                .milestones()
                .iter()
                .filter(|m| m.model() == model)
                .collect();
            ModelBreakdown {
                model,
                milestone_ids: group.iter().map(|m| m.id()).collect(),
                achieved_count: group.iter().filter(|m| m.is_achieved()).count(),
                remaining_risk: composite_risk(group.iter().copied()),
            }
        })
        .collect()
}
