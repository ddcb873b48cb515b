//! # Stagegate Analytics
//!
//! Risk and return analytics for startup de-risking journeys.
//!
//! This crate derives every metric the dashboard renders from a
//! [`Journey`](stagegate_core::Journey):
//!
//! - **Composite risk**: probability that at least one remaining milestone
//!   fails, from independent per-stage risks
//! - **Required multiple**: break-even return multiple given composite risk
//! - **Implied IRR**: annualized rate over the remaining horizon
//! - **Progression**: stage-by-stage risk reduction series for charting
//! - **Framework breakdowns**: aggregates by assessment criterion and
//!   business model
//! - **Funding stage**: typical raise bracket for the current progress
//!
//! All functions are pure and recompute from scratch on every call; there
//! is no cached or incremental state.
//!
//! ## Example
//!
//! ```rust
//! use stagegate_analytics::JourneyAnalytics;
//! use stagegate_core::Journey;
//!
//! let mut journey = Journey::seeded();
//! journey.toggle_achieved(1)?;
//!
//! let analytics = JourneyAnalytics::calculate(&journey);
//! println!("composite risk: {}", analytics.composite_risk);
//! println!("required multiple: {}", analytics.required_multiple);
//! # Ok::<(), stagegate_core::StagegateError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod funding;
pub mod metrics;
mod multiple;
pub mod progression;
pub mod summary;

pub use multiple::RequiredMultiple;

// Re-export the primary API at crate root
pub use framework::{by_assessment, by_business_model, AssessmentBreakdown, ModelBreakdown};
pub use funding::FundingStage;
pub use metrics::{
    composite_risk, implied_irr, remaining_months, required_multiple, success_probability,
};
pub use progression::{progression, ProgressionPoint};
pub use summary::JourneyAnalytics;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::framework::{by_assessment, by_business_model};
    pub use crate::funding::FundingStage;
    pub use crate::metrics::*;
    pub use crate::progression::{progression, ProgressionPoint};
    pub use crate::summary::JourneyAnalytics;
    pub use crate::RequiredMultiple;
}
