//! Error types for the Stagegate library.
//!
//! This module defines the error types used throughout Stagegate,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Stagegate operations.
pub type StagegateResult<T> = Result<T, StagegateError>;

/// The main error type for Stagegate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StagegateError {
    /// Stage risk outside the allowed range.
    #[error("Invalid risk: {value} outside allowed range [{min}, {max}]")]
    RiskOutOfRange {
        /// The rejected risk value.
        value: Decimal,
        /// Lower bound of the allowed range.
        min: Decimal,
        /// Upper bound of the allowed range.
        max: Decimal,
    },

    /// Stage duration outside the allowed range.
    #[error("Invalid duration: {months} months outside allowed range [{min}, {max}]")]
    MonthsOutOfRange {
        /// The rejected duration in months.
        months: u32,
        /// Lower bound of the allowed range.
        min: u32,
        /// Upper bound of the allowed range.
        max: u32,
    },

    /// No milestone with the given identifier exists in the journey.
    #[error("Milestone not found: #{id}")]
    MilestoneNotFound {
        /// Identifier of the missing milestone.
        id: u8,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid journey construction.
    #[error("Invalid journey: {reason}")]
    InvalidJourney {
        /// Description of the violation.
        reason: String,
    },
}

impl StagegateError {
    /// Creates a milestone not found error.
    #[must_use]
    pub fn not_found(id: u8) -> Self {
        Self::MilestoneNotFound { id }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid journey error.
    #[must_use]
    pub fn invalid_journey(reason: impl Into<String>) -> Self {
        Self::InvalidJourney {
            reason: reason.into(),
        }
    }
}
