//! # Stagegate
//!
//! Startup de-risking analytics: a nine-milestone journey model computing
//! composite risk, required investor return multiples, and implied IRR.
//!
//! This crate is a facade re-exporting the public API of
//! [`stagegate_core`] (domain types, the journey registry, seed data) and
//! [`stagegate_analytics`] (derived metrics, progression series, framework
//! breakdowns).
//!
//! ## Example
//!
//! ```rust
//! use stagegate::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut journey = Journey::seeded();
//! journey.toggle_achieved(1)?;
//! journey.set_risk(2, dec!(0.30))?;
//!
//! let analytics = JourneyAnalytics::calculate(&journey);
//! assert!(analytics.composite_risk < dec!(0.92));
//!
//! let chart = progression(&journey);
//! assert_eq!(chart.len(), 10);
//! # Ok::<(), stagegate::StagegateError>(())
//! ```

#![warn(missing_docs)]

pub use stagegate_analytics::{
    by_assessment, by_business_model, composite_risk, implied_irr, progression, remaining_months,
    required_multiple, success_probability, AssessmentBreakdown, FundingStage, JourneyAnalytics,
    ModelBreakdown, ProgressionPoint, RequiredMultiple,
};
pub use stagegate_core::{
    Assessment, BusinessModel, Journey, Milestone, StageRisk, StagegateError, StagegateResult,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use stagegate_analytics::prelude::*;
    pub use stagegate_core::prelude::*;
}
