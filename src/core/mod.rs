//! Pure arithmetic and symbol core.
//!
//! This module contains the pure functional core of the calculator:
//! - Canonical operator symbols and keypad alias mapping
//! - Two-operand evaluation with its single failure mode
//! - The derived phase classification of the input machine
//!
//! All logic in this module is pure (no side effects); mutation and
//! rendering live in the `session` and `render` modules.

mod eval;
mod operator;
mod phase;

pub use eval::{evaluate, format_number, round_result, EvalError};
pub use operator::Operator;
pub use phase::Phase;
