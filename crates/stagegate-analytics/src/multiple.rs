//! Required return multiple.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The minimum return multiple an investor needs to break even in
/// expectation given the journey's composite risk.
///
/// A venture with zero success probability has no finite break-even
/// multiple; that case is the distinct [`RequiredMultiple::Unbacked`]
/// variant rather than a float overflow, so callers surface it explicitly.
///
/// # Example
///
/// ```rust
/// use stagegate_analytics::RequiredMultiple;
/// use rust_decimal_macros::dec;
///
/// let multiple = RequiredMultiple::Finite(dec!(12.0));
/// assert_eq!(multiple.value(), Some(dec!(12.0)));
/// assert_eq!(multiple.to_string(), "12.0x");
/// assert_eq!(RequiredMultiple::Unbacked.to_string(), "∞x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredMultiple {
    /// Break-even multiple `1 / success_probability`.
    Finite(Decimal),
    /// No feasible return: success probability is zero.
    Unbacked,
}

impl RequiredMultiple {
    /// Returns the multiple when finite.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        match self {
            RequiredMultiple::Finite(value) => Some(*value),
            RequiredMultiple::Unbacked => None,
        }
    }

    /// Returns true for the unbacked-bet case.
    #[must_use]
    pub fn is_unbacked(&self) -> bool {
        matches!(self, RequiredMultiple::Unbacked)
    }
}

impl fmt::Display for RequiredMultiple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredMultiple::Finite(value) => write!(f, "{value:.1}x"),
            RequiredMultiple::Unbacked => write!(f, "∞x"),
        }
    }
}
