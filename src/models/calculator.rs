//! Calculator state model.
//!
//! [`CalculatorState`] is a pure value; every transition in
//! [`crate::processing::calculator`] takes the current state and returns a
//! new one. The UI owns the state across calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pending binary operator.
///
/// The percentage *button* (divide by 100) is a separate transition; the
/// [`Operation::Modulo`] variant here is the `%` remainder operator. The two
/// are intentionally distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Modulo => "%",
        };
        write!(f, "{symbol}")
    }
}

/// Display-oriented calculator state.
///
/// Values are kept as the decimal strings the user typed, so trailing zeros,
/// an in-progress decimal point and the "Error" sentinel survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The value on the display, as typed.
    pub current_value: String,
    /// Left operand of a pending operation; empty when none is pending.
    pub previous_value: String,
    /// Pending binary operator, if any.
    pub operation: Option<Operation>,
    /// When set, the next digit starts a fresh number instead of appending.
    pub should_reset_display: bool,
    /// M+/M-/MR/MC register.
    pub memory: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            should_reset_display: false,
            memory: "0".to_string(),
        }
    }
}
