//! Preview-string formatting.
//!
//! The preview shows the in-progress expression in human-readable form.
//! Operators always render as their display glyph here, never the ASCII
//! form used for dispatch.

use crate::core::{format_number, Operator};

/// Expression shown while the second operand has not been typed: `"5 ×"`.
pub fn pending(first: f64, operator: Operator) -> String {
    format!("{} {}", format_number(first), operator.glyph())
}

/// Full expression shown beneath an equals result: `"5 × 3"`.
pub fn complete(first: f64, operator: Operator, second: f64) -> String {
    format!(
        "{} {} {}",
        format_number(first),
        operator.glyph(),
        format_number(second)
    )
}
