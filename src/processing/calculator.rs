//! Basic calculator reducer.
//!
//! Every transition is a pure total function from the current
//! [`CalculatorState`] to the next one. Numeric domain errors (divide by
//! zero, sqrt of a negative) are never raised as faults; they flow through
//! as NaN or the literal "Error" sentinel, which [`format_display_value`]
//! normalizes for presentation.

use crate::models::{CalculatorState, Operation};

/// Parse a display string into f64, keeping the sentinel vocabulary.
///
/// Unparseable input (including the "Error" sentinel and an empty string)
/// becomes NaN rather than a fault.
pub fn parse_value(s: &str) -> f64 {
    match s {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => s.parse().unwrap_or(f64::NAN),
    }
}

/// Render an f64 back to a display string.
///
/// Integral values print without a trailing ".0"; non-finite values keep the
/// names the display formatter recognizes. Negative zero prints as "0".
pub fn num_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Core evaluator for the pending binary operator.
///
/// Division by zero yields NaN, not an error. `Modulo` is the remainder
/// operator, distinct from the percentage button. With no pending operator
/// the right operand passes through unchanged.
pub fn calculate(a: f64, b: f64, operation: Option<Operation>) -> f64 {
    match operation {
        Some(Operation::Add) => a + b,
        Some(Operation::Subtract) => a - b,
        Some(Operation::Multiply) => a * b,
        Some(Operation::Divide) => {
            if b != 0.0 {
                a / b
            } else {
                f64::NAN
            }
        }
        Some(Operation::Modulo) => a % b,
        None => b,
    }
}

/// Digit or decimal-point entry.
pub fn handle_number(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.should_reset_display {
        return CalculatorState {
            current_value: digit.to_string(),
            should_reset_display: false,
            ..state.clone()
        };
    }

    // Suppress the leading zero
    if state.current_value == "0" && digit != '.' {
        return CalculatorState {
            current_value: digit.to_string(),
            ..state.clone()
        };
    }

    // At most one decimal point
    if digit == '.' && state.current_value.contains('.') {
        return state.clone();
    }

    let mut current_value = state.current_value.clone();
    current_value.push(digit);
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

/// Binary operator entry.
///
/// When an operation is already pending and the display was not just reset
/// (the user chained "5 + 3 +" rather than selecting operators twice), the
/// pending operation is evaluated immediately and its result carried as both
/// operands of the new one.
pub fn handle_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    if !state.previous_value.is_empty() && state.operation.is_some() && !state.should_reset_display
    {
        let result = num_to_string(calculate(
            parse_value(&state.previous_value),
            parse_value(&state.current_value),
            state.operation,
        ));

        return CalculatorState {
            current_value: result.clone(),
            previous_value: result,
            operation: Some(operation),
            should_reset_display: true,
            memory: state.memory.clone(),
        };
    }

    CalculatorState {
        previous_value: state.current_value.clone(),
        operation: Some(operation),
        should_reset_display: true,
        ..state.clone()
    }
}

/// Equals: evaluate the pending operation, if any.
pub fn handle_equals(state: &CalculatorState) -> CalculatorState {
    if state.previous_value.is_empty() || state.operation.is_none() {
        return state.clone();
    }

    let result = calculate(
        parse_value(&state.previous_value),
        parse_value(&state.current_value),
        state.operation,
    );

    CalculatorState {
        current_value: num_to_string(result),
        previous_value: String::new(),
        operation: None,
        should_reset_display: true,
        memory: state.memory.clone(),
    }
}

/// Full reset, memory included.
pub fn handle_clear() -> CalculatorState {
    CalculatorState::default()
}

/// Reset only the display value.
pub fn handle_clear_entry(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_value: "0".to_string(),
        ..state.clone()
    }
}

/// Percentage button: divide the display value by 100.
pub fn handle_percentage(state: &CalculatorState) -> CalculatorState {
    let value = parse_value(&state.current_value);
    CalculatorState {
        current_value: num_to_string(value / 100.0),
        ..state.clone()
    }
}

/// Square root; a negative operand becomes the "Error" sentinel.
pub fn handle_square_root(state: &CalculatorState) -> CalculatorState {
    let value = parse_value(&state.current_value);
    if value < 0.0 {
        return CalculatorState {
            current_value: "Error".to_string(),
            should_reset_display: true,
            ..state.clone()
        };
    }
    CalculatorState {
        current_value: num_to_string(value.sqrt()),
        should_reset_display: true,
        ..state.clone()
    }
}

/// Negate the display value.
pub fn handle_toggle_sign(state: &CalculatorState) -> CalculatorState {
    let value = parse_value(&state.current_value);
    CalculatorState {
        current_value: num_to_string(-value),
        ..state.clone()
    }
}

/// Drop the last typed character; an emptied display becomes "0". No-op
/// while the display is about to be overwritten.
pub fn handle_backspace(state: &CalculatorState) -> CalculatorState {
    if state.should_reset_display {
        return state.clone();
    }

    let mut current_value = state.current_value.clone();
    current_value.pop();
    if current_value.is_empty() {
        current_value = "0".to_string();
    }
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

/// M+: add the display value into the memory register.
pub fn handle_memory_add(state: &CalculatorState) -> CalculatorState {
    let memory = parse_value(&state.memory) + parse_value(&state.current_value);
    CalculatorState {
        memory: num_to_string(memory),
        should_reset_display: true,
        ..state.clone()
    }
}

/// M-: subtract the display value from the memory register.
pub fn handle_memory_subtract(state: &CalculatorState) -> CalculatorState {
    let memory = parse_value(&state.memory) - parse_value(&state.current_value);
    CalculatorState {
        memory: num_to_string(memory),
        should_reset_display: true,
        ..state.clone()
    }
}

/// MR: recall memory into the display.
pub fn handle_memory_recall(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_value: state.memory.clone(),
        should_reset_display: true,
        ..state.clone()
    }
}

/// MC: reset the memory register.
pub fn handle_memory_clear(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        memory: "0".to_string(),
        ..state.clone()
    }
}

/// Normalize a display string for presentation.
///
/// The sentinel values collapse to "Error", unparseable input renders as
/// "0", and very large or very small magnitudes switch to exponential
/// notation with six fractional digits. In-progress typed input passes
/// through untouched.
pub fn format_display_value(value: &str) -> String {
    if value == "Error" || value == "Infinity" || value == "NaN" {
        return "Error".to_string();
    }

    let num = parse_value(value);
    if num.is_nan() {
        return "0".to_string();
    }
    if num.is_infinite() {
        return "Error".to_string();
    }

    if num.abs() > 999_999_999_999.0 || (num.abs() < 0.000001 && num != 0.0) {
        return format!("{num:.6e}");
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(mut state: CalculatorState, digits: &str) -> CalculatorState {
        for d in digits.chars() {
            state = handle_number(&state, d);
        }
        state
    }

    #[test]
    fn test_number_entry() {
        let state = press_digits(CalculatorState::default(), "12");
        assert_eq!(state.current_value, "12");

        // leading zero suppressed
        let state = handle_number(&CalculatorState::default(), '7');
        assert_eq!(state.current_value, "7");

        // a leading decimal point keeps the zero
        let state = handle_number(&CalculatorState::default(), '.');
        assert_eq!(state.current_value, "0.");

        // second decimal point is ignored
        let state = press_digits(CalculatorState::default(), "1.5.");
        assert_eq!(state.current_value, "1.5");
    }

    #[test]
    fn test_number_entry_after_reset() {
        let state = CalculatorState {
            current_value: "42".to_string(),
            should_reset_display: true,
            ..CalculatorState::default()
        };
        let state = handle_number(&state, '9');
        assert_eq!(state.current_value, "9");
        assert!(!state.should_reset_display);
    }

    #[test]
    fn test_add_sequence() {
        // 12 + 3 = 15
        let state = press_digits(CalculatorState::default(), "12");
        let state = handle_operation(&state, Operation::Add);
        let state = handle_number(&state, '3');
        let state = handle_equals(&state);
        assert_eq!(state.current_value, "15");
        assert_eq!(state.previous_value, "");
        assert_eq!(state.operation, None);
        assert!(state.should_reset_display);
    }

    #[test]
    fn test_chained_operators() {
        // 5 + 3 + evaluates the pending 5+3 immediately
        let state = handle_number(&CalculatorState::default(), '5');
        let state = handle_operation(&state, Operation::Add);
        let state = handle_number(&state, '3');
        let state = handle_operation(&state, Operation::Add);
        assert_eq!(state.current_value, "8");
        assert_eq!(state.previous_value, "8");
        assert_eq!(state.operation, Some(Operation::Add));
        assert!(state.should_reset_display);

        // equals applies the still-pending operator to the carried result
        let state = handle_equals(&state);
        assert_eq!(state.current_value, "16");
    }

    #[test]
    fn test_operator_selected_twice_does_not_evaluate() {
        let state = handle_number(&CalculatorState::default(), '5');
        let state = handle_operation(&state, Operation::Add);
        let state = handle_operation(&state, Operation::Subtract);
        // no second operand was typed, so nothing evaluated
        assert_eq!(state.current_value, "5");
        assert_eq!(state.previous_value, "5");
        assert_eq!(state.operation, Some(Operation::Subtract));
    }

    #[test]
    fn test_equals_without_pending_op() {
        let state = press_digits(CalculatorState::default(), "42");
        let next = handle_equals(&state);
        assert_eq!(next, state);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(calculate(5.0, 0.0, Some(Operation::Divide)).is_nan());
        assert_eq!(calculate(5.0, 2.0, Some(Operation::Divide)), 2.5);
    }

    #[test]
    fn test_modulo_is_remainder() {
        assert_eq!(calculate(7.0, 3.0, Some(Operation::Modulo)), 1.0);
        assert_eq!(calculate(-7.0, 3.0, Some(Operation::Modulo)), -1.0);
    }

    #[test]
    fn test_no_operation_returns_b() {
        assert_eq!(calculate(5.0, 3.0, None), 3.0);
    }

    #[test]
    fn test_clear_is_initial_state() {
        assert_eq!(handle_clear(), CalculatorState::default());
    }

    #[test]
    fn test_clear_entry_preserves_pending() {
        let state = CalculatorState {
            current_value: "99".to_string(),
            previous_value: "1".to_string(),
            operation: Some(Operation::Multiply),
            should_reset_display: false,
            memory: "7".to_string(),
        };
        let next = handle_clear_entry(&state);
        assert_eq!(next.current_value, "0");
        assert_eq!(next.previous_value, "1");
        assert_eq!(next.operation, Some(Operation::Multiply));
        assert_eq!(next.memory, "7");
    }

    #[test]
    fn test_percentage() {
        let state = press_digits(CalculatorState::default(), "50");
        let state = handle_percentage(&state);
        assert_eq!(state.current_value, "0.5");
        assert!(!state.should_reset_display);
    }

    #[test]
    fn test_square_root() {
        let state = press_digits(CalculatorState::default(), "16");
        let state = handle_square_root(&state);
        assert_eq!(state.current_value, "4");
        assert!(state.should_reset_display);
    }

    #[test]
    fn test_square_root_negative_is_error() {
        let state = CalculatorState {
            current_value: "-4".to_string(),
            ..CalculatorState::default()
        };
        let state = handle_square_root(&state);
        assert_eq!(state.current_value, "Error");
        assert!(state.should_reset_display);
    }

    #[test]
    fn test_toggle_sign() {
        let state = press_digits(CalculatorState::default(), "5");
        let state = handle_toggle_sign(&state);
        assert_eq!(state.current_value, "-5");
        let state = handle_toggle_sign(&state);
        assert_eq!(state.current_value, "5");

        // negating zero stays "0"
        let state = handle_toggle_sign(&CalculatorState::default());
        assert_eq!(state.current_value, "0");
    }

    #[test]
    fn test_backspace() {
        let state = press_digits(CalculatorState::default(), "12");
        let state = handle_backspace(&state);
        assert_eq!(state.current_value, "1");
        let state = handle_backspace(&state);
        assert_eq!(state.current_value, "0");

        // no-op when the display is pending a reset
        let state = CalculatorState {
            current_value: "123".to_string(),
            should_reset_display: true,
            ..CalculatorState::default()
        };
        assert_eq!(handle_backspace(&state), state);
    }

    #[test]
    fn test_memory_ops() {
        let state = press_digits(CalculatorState::default(), "5");
        let state = handle_memory_add(&state);
        assert_eq!(state.memory, "5");
        assert!(state.should_reset_display);

        let state = CalculatorState {
            current_value: "2".to_string(),
            should_reset_display: false,
            ..state
        };
        let state = handle_memory_subtract(&state);
        assert_eq!(state.memory, "3");

        let state = handle_memory_recall(&state);
        assert_eq!(state.current_value, "3");
        assert!(state.should_reset_display);

        let state = handle_memory_clear(&state);
        assert_eq!(state.memory, "0");
    }

    #[test]
    fn test_parse_and_render_round_trip() {
        assert_eq!(num_to_string(8.0), "8");
        assert_eq!(num_to_string(0.5), "0.5");
        assert_eq!(num_to_string(-0.0), "0");
        assert_eq!(num_to_string(f64::NAN), "NaN");
        assert_eq!(num_to_string(f64::INFINITY), "Infinity");
        assert_eq!(num_to_string(f64::NEG_INFINITY), "-Infinity");

        assert_eq!(parse_value("8"), 8.0);
        assert_eq!(parse_value("Infinity"), f64::INFINITY);
        assert_eq!(parse_value("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_value("Error").is_nan());
        assert!(parse_value("").is_nan());
    }

    #[test]
    fn test_format_display_value() {
        assert_eq!(format_display_value("Error"), "Error");
        assert_eq!(format_display_value("Infinity"), "Error");
        assert_eq!(format_display_value("NaN"), "Error");
        assert_eq!(format_display_value("abc"), "0");
        assert_eq!(format_display_value(""), "0");

        // in-progress typed input passes through untouched
        assert_eq!(format_display_value("1.50"), "1.50");
        assert_eq!(format_display_value("0."), "0.");
        assert_eq!(format_display_value("123"), "123");
        assert_eq!(format_display_value("0"), "0");

        // extremes switch to exponential notation
        assert_eq!(format_display_value("10000000000000"), "1.000000e13");
        assert_eq!(format_display_value("0.0000001"), "1.000000e-7");
    }
}
