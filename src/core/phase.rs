//! Conceptual phases of the input machine.
//!
//! The session stores flat fields (display text, pending operand and
//! operator, two flags); the phase is a pure classification of those
//! fields, used for diagnostics, journaling, and tests. It is derived on
//! demand and never stored redundantly.

use serde::{Deserialize, Serialize};

/// Where the session currently sits in the entry cycle.
///
/// # Example
///
/// ```rust
/// use reckon::core::Phase;
///
/// assert_eq!(Phase::AwaitingSecond.name(), "AwaitingSecond");
/// assert!(Phase::ShowingResult.is_reset_pending());
/// assert!(!Phase::Empty.is_reset_pending());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No first operand latched yet; digits edit the first entry.
    Empty,
    /// A first operand exists but no operator has been chosen.
    HasFirst,
    /// An operator was just chosen; the next digit starts the second operand.
    AwaitingSecond,
    /// Digits are being typed for the second operand.
    EnteringSecond,
    /// A result or error is on display; the next digit starts fresh.
    ShowingResult,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::HasFirst => "HasFirst",
            Self::AwaitingSecond => "AwaitingSecond",
            Self::EnteringSecond => "EnteringSecond",
            Self::ShowingResult => "ShowingResult",
        }
    }

    /// Check whether the next digit entry will clear the session first.
    pub fn is_reset_pending(&self) -> bool {
        matches!(self, Self::ShowingResult)
    }
}
