//! Typed keypad input events.
//!
//! Every labeled control on the keypad maps to one [`Input`] value at the
//! boundary; the session dispatches on the event, never on raw labels.

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// A single discrete keypad event.
///
/// # Example
///
/// ```rust
/// use reckon::core::Operator;
/// use reckon::session::Input;
///
/// assert_eq!(Input::from_key("7"), Some(Input::Digit(7)));
/// assert_eq!(Input::from_key("÷"), Some(Input::Operator(Operator::Divide)));
/// assert_eq!(Input::from_key("AC"), Some(Input::Clear));
/// assert_eq!(Input::from_key("what"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Input {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// The percent key.
    Percent,
    /// The backspace key.
    Backspace,
    /// The clear key.
    Clear,
    /// The parentheses key (wired but intentionally inert).
    Parentheses,
}

impl Input {
    /// Map a keypad control's label to its event.
    ///
    /// Operator labels are accepted in both the ASCII and the glyph
    /// notation. Unknown labels return `None` and are ignored by callers.
    pub fn from_key(label: &str) -> Option<Self> {
        if let Some(operator) = Operator::from_symbol(label) {
            return Some(Self::Operator(operator));
        }

        let mut chars = label.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(digit) = ch.to_digit(10) {
                return Some(Self::Digit(digit as u8));
            }
        }

        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "%" => Some(Self::Percent),
            "AC" | "C" => Some(Self::Clear),
            "\u{232b}" => Some(Self::Backspace),
            "(" | ")" | "()" => Some(Self::Parentheses),
            _ => None,
        }
    }
}
