//! Milestone type and builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Assessment, BusinessModel, StageRisk};
use crate::error::{StagegateError, StagegateResult};

/// One discrete, independently-assessed de-risking stage in a startup
/// journey.
///
/// Fields are private so the invariants hold by construction: only `risk`,
/// `months`, and `achieved` are mutable, and only through validating
/// setters. The identifier, name, classifications, question, and evidence
/// text are fixed for the milestone's lifetime.
///
/// # Example
///
/// ```rust
/// use stagegate_core::types::{Assessment, BusinessModel, Milestone};
/// use rust_decimal_macros::dec;
///
/// let milestone = Milestone::builder()
///     .id(1)
///     .name("Problem-Solution Fit")
///     .risk(dec!(0.40))
///     .months(6)
///     .assessment(Assessment::Opportunity)
///     .model(BusinessModel::Discovery)
///     .question("Is there a real, painful problem?")
///     .evidence("Customer interviews")
///     .build()?;
///
/// assert!(!milestone.is_achieved());
/// # Ok::<(), stagegate_core::StagegateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    id: u8,
    name: String,
    risk: StageRisk,
    months: u32,
    achieved: bool,
    assessment: Assessment,
    model: BusinessModel,
    question: String,
    evidence: String,
}

impl Milestone {
    /// Shortest admissible stage duration, in months.
    pub const MIN_MONTHS: u32 = 1;

    /// Longest admissible stage duration, in months.
    pub const MAX_MONTHS: u32 = 36;

    /// Creates a new milestone builder.
    #[must_use]
    pub fn builder() -> MilestoneBuilder {
        MilestoneBuilder::default()
    }

    /// Returns the milestone identifier.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a compact label for chart axes: the first two words of the
    /// name.
    #[must_use]
    pub fn stage_label(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the probability of failure at this stage.
    #[must_use]
    pub fn risk(&self) -> StageRisk {
        self.risk
    }

    /// Returns the expected months to clear this stage.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns whether this stage's risk has been resolved.
    #[must_use]
    pub fn is_achieved(&self) -> bool {
        self.achieved
    }

    /// Returns the assessment criterion this milestone answers.
    #[must_use]
    pub fn assessment(&self) -> Assessment {
        self.assessment
    }

    /// Returns the business model this milestone de-risks.
    #[must_use]
    pub fn model(&self) -> BusinessModel {
        self.model
    }

    /// Returns the key question this milestone answers.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the evidence that demonstrates achievement.
    #[must_use]
    pub fn evidence(&self) -> &str {
        &self.evidence
    }

    /// Replaces the stage risk.
    ///
    /// The range check happened when the [`StageRisk`] was constructed, so
    /// this cannot store an invalid value.
    pub fn set_risk(&mut self, risk: StageRisk) {
        self.risk = risk;
    }

    /// Replaces the stage duration.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::MonthsOutOfRange` if `months` falls outside
    /// `[1, 36]`. The stored duration is unchanged on rejection.
    pub fn set_months(&mut self, months: u32) -> StagegateResult<()> {
        Self::validate_months(months)?;
        self.months = months;
        Ok(())
    }

    /// Sets the achieved flag.
    pub fn set_achieved(&mut self, achieved: bool) {
        self.achieved = achieved;
    }

    /// Flips the achieved flag, returning the new value.
    pub fn toggle_achieved(&mut self) -> bool {
        self.achieved = !self.achieved;
        self.achieved
    }

    /// Validates the stored risk and duration.
    ///
    /// Only relevant for milestones that bypassed the builder, e.g.
    /// deserialized data.
    ///
    /// # Errors
    ///
    /// Returns the first range violation found.
    pub fn validate(&self) -> StagegateResult<()> {
        self.risk.validate()?;
        Self::validate_months(self.months)
    }

    fn validate_months(months: u32) -> StagegateResult<()> {
        if months < Self::MIN_MONTHS || months > Self::MAX_MONTHS {
            return Err(StagegateError::MonthsOutOfRange {
                months,
                min: Self::MIN_MONTHS,
                max: Self::MAX_MONTHS,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// Builder for constructing a [`Milestone`].
#[derive(Debug, Clone, Default)]
pub struct MilestoneBuilder {
    id: Option<u8>,
    name: Option<String>,
    risk: Option<Decimal>,
    months: Option<u32>,
    achieved: bool,
    assessment: Option<Assessment>,
    model: Option<BusinessModel>,
    question: Option<String>,
    evidence: Option<String>,
}

impl MilestoneBuilder {
    /// Sets the milestone identifier.
    #[must_use]
    pub fn id(mut self, id: u8) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the failure probability as a decimal (0.40 = 40%).
    #[must_use]
    pub fn risk(mut self, risk: Decimal) -> Self {
        self.risk = Some(risk);
        self
    }

    /// Sets the expected duration in months.
    #[must_use]
    pub fn months(mut self, months: u32) -> Self {
        self.months = Some(months);
        self
    }

    /// Sets the initial achieved flag (defaults to false).
    #[must_use]
    pub fn achieved(mut self, achieved: bool) -> Self {
        self.achieved = achieved;
        self
    }

    /// Sets the assessment criterion.
    #[must_use]
    pub fn assessment(mut self, assessment: Assessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    /// Sets the business model.
    #[must_use]
    pub fn model(mut self, model: BusinessModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the key question text.
    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Sets the evidence-of-achievement text.
    #[must_use]
    pub fn evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Builds the milestone.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::MissingField` if a required field was never
    /// set, `RiskOutOfRange` or `MonthsOutOfRange` if a supplied value is
    /// invalid.
    pub fn build(self) -> StagegateResult<Milestone> {
        let id = self.id.ok_or_else(|| StagegateError::missing_field("id"))?;
        let name = self
            .name
            .ok_or_else(|| StagegateError::missing_field("name"))?;
        let risk = self
            .risk
            .ok_or_else(|| StagegateError::missing_field("risk"))?;
        let months = self
            .months
            .ok_or_else(|| StagegateError::missing_field("months"))?;
        let assessment = self
            .assessment
            .ok_or_else(|| StagegateError::missing_field("assessment"))?;
        let model = self
            .model
            .ok_or_else(|| StagegateError::missing_field("model"))?;
        let question = self
            .question
            .ok_or_else(|| StagegateError::missing_field("question"))?;
        let evidence = self
            .evidence
            .ok_or_else(|| StagegateError::missing_field("evidence"))?;

        let risk = StageRisk::new(risk)?;
        Milestone::validate_months(months)?;

        Ok(Milestone {
            id,
            name,
            risk,
            months,
            achieved: self.achieved,
            assessment,
            model,
            question,
            evidence,
        })
    }
}
