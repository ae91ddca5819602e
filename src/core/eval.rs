//! Two-operand arithmetic evaluation.
//!
//! The evaluator is pure: it dispatches on a canonical [`Operator`] and
//! has no side effects. Division by zero is the only failure mode;
//! everything else is total over finite input. Results are rounded to 8
//! decimal places before they reach the display, bounding floating-point
//! drift like `0.1 + 0.2`.

use super::operator::Operator;
use thiserror::Error;

/// Scale factor for rounding results to 8 decimal places.
const ROUND_SCALE: f64 = 1e8;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// Division with a zero divisor. The message is shown verbatim on the
    /// display surface in place of a numeric result.
    #[error("Cannot divide by zero")]
    DivideByZero,
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::DivideByZero);
    }
    Ok(a / b)
}

/// Evaluate a single two-operand operation.
///
/// # Example
///
/// ```rust
/// use reckon::core::{evaluate, EvalError, Operator};
///
/// assert_eq!(evaluate(Operator::Add, 5.0, 3.0), Ok(8.0));
/// assert_eq!(evaluate(Operator::Divide, 7.0, 0.0), Err(EvalError::DivideByZero));
/// ```
pub fn evaluate(operator: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    match operator {
        Operator::Add => Ok(add(a, b)),
        Operator::Subtract => Ok(subtract(a, b)),
        Operator::Multiply => Ok(multiply(a, b)),
        Operator::Divide => divide(a, b),
    }
}

/// Round an evaluation result to 8 decimal places.
///
/// ```rust
/// use reckon::core::round_result;
///
/// assert_eq!(round_result(0.1 + 0.2), 0.3);
/// ```
pub fn round_result(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Render a number the way the display shows it.
///
/// Integral values print without a trailing `.0`, matching keypad
/// conventions: `8`, not `8.0`.
///
/// ```rust
/// use reckon::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.09), "0.09");
/// ```
pub fn format_number(value: f64) -> String {
    value.to_string()
}
