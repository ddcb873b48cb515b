//! Stage risk type.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StagegateError, StagegateResult};

/// The probability that a single milestone fails.
///
/// Risks are expressed as decimals (0.40 = 40%) and are only valid within
/// `[StageRisk::MIN, StageRisk::MAX]`. The constructor rejects out-of-range
/// values; an invalid risk is never stored.
///
/// # Example
///
/// ```rust
/// use stagegate_core::types::StageRisk;
/// use rust_decimal_macros::dec;
///
/// let risk = StageRisk::new(dec!(0.40))?;
/// assert_eq!(risk.as_percentage(), dec!(40.0));
/// assert_eq!(risk.survival(), dec!(0.60));
/// # Ok::<(), stagegate_core::StagegateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRisk(Decimal);

impl StageRisk {
    /// Smallest admissible stage risk (5%).
    pub const MIN: Decimal = dec!(0.05);

    /// Largest admissible stage risk (60%).
    pub const MAX: Decimal = dec!(0.60);

    /// Creates a new stage risk from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::RiskOutOfRange` if the value falls outside
    /// `[0.05, 0.60]`. Values are never clamped.
    pub fn new(value: Decimal) -> StagegateResult<Self> {
        if value < Self::MIN || value > Self::MAX {
            return Err(StagegateError::RiskOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Validates the stored value.
    ///
    /// Only relevant for values that bypassed [`StageRisk::new`], e.g.
    /// deserialized data.
    ///
    /// # Errors
    ///
    /// Returns `StagegateError::RiskOutOfRange` if the value is out of range.
    pub fn validate(&self) -> StagegateResult<()> {
        Self::new(self.0).map(|_| ())
    }

    /// Returns the risk as a decimal (0.40 = 40%).
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the risk as a percentage.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Returns the probability that the stage succeeds, `1 - risk`.
    #[must_use]
    pub fn survival(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl fmt::Display for StageRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.as_percentage())
    }
}
