//! # Stagegate Core
//!
//! Core types for the Stagegate startup de-risking analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Stagegate:
//!
//! - **Types**: Domain-specific types like `Milestone`, `StageRisk`,
//!   `Assessment`, `BusinessModel`
//! - **Journey**: The ordered milestone registry and its validated mutation
//!   operations
//! - **Seed data**: The standard nine-milestone venture journey
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes and closed enums prevent invalid states
//! - **Reject, Don't Clamp**: Out-of-range input is an error at the
//!   mutation boundary; an invalid value is never stored
//! - **Derived, Not Cached**: Metrics are recomputed from the current list
//!   by the analytics layer on every change
//!
//! ## Example
//!
//! ```rust
//! use stagegate_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut journey = Journey::seeded();
//! journey.toggle_achieved(1)?;
//! journey.set_risk(2, dec!(0.30))?;
//!
//! assert_eq!(journey.achieved_count(), 1);
//! assert!(journey.set_risk(2, dec!(0.70)).is_err());
//! # Ok::<(), stagegate_core::StagegateError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod journey;
pub mod seed;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{StagegateError, StagegateResult};
    pub use crate::journey::Journey;
    pub use crate::types::{Assessment, BusinessModel, Milestone, MilestoneBuilder, StageRisk};
}

// Re-export commonly used types at crate root
pub use error::{StagegateError, StagegateResult};
pub use journey::Journey;
pub use types::{Assessment, BusinessModel, Milestone, StageRisk};
