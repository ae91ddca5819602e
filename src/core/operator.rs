//! Canonical operator symbols and their keypad aliases.
//!
//! Keypad controls label the same operation two ways: an ASCII form
//! (`+ - * /`) and a display-glyph form (`+ − × ÷`). Both are accepted at
//! the input boundary and normalized to the canonical [`Operator`] enum;
//! the glyph form is produced again only at the render boundary. Neither
//! mapping is consulted during evaluation.

use serde::{Deserialize, Serialize};

/// Canonical arithmetic operator.
///
/// # Example
///
/// ```rust
/// use reckon::core::Operator;
///
/// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
/// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
/// assert_eq!(Operator::Multiply.ascii(), '*');
/// assert_eq!(Operator::Multiply.glyph(), '×');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse a keypad symbol in either notation.
    ///
    /// Accepts the ASCII set and the display-glyph set (note that the
    /// glyph minus is U+2212, not the ASCII hyphen). Unknown symbols
    /// return `None`, which callers treat as a silent no-op.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "\u{2212}" => Some(Self::Subtract),
            "*" | "\u{00d7}" => Some(Self::Multiply),
            "/" | "\u{00f7}" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The canonical ASCII form used for dispatch and diagnostics.
    pub fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// The glyph shown to the user, never the ASCII form.
    pub fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '\u{2212}',
            Self::Multiply => '\u{00d7}',
            Self::Divide => '\u{00f7}',
        }
    }

    /// Get the operator's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_symbols_normalize() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
    }

    #[test]
    fn glyph_symbols_normalize() {
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol("=="), None);
    }

    #[test]
    fn ascii_hyphen_and_glyph_minus_are_distinct_inputs() {
        // Both arrive from real keypads; both must land on Subtract.
        assert_eq!(Operator::from_symbol("-"), Operator::from_symbol("−"));
        assert_ne!('-', Operator::Subtract.glyph());
    }

    #[test]
    fn glyph_round_trips_through_from_symbol() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_symbol(&op.glyph().to_string()), Some(op));
            assert_eq!(Operator::from_symbol(&op.ascii().to_string()), Some(op));
        }
    }

    #[test]
    fn operator_serializes_correctly() {
        let op = Operator::Divide;
        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(op, deserialized);
    }
}
