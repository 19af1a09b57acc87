//! Scientific function dispatch.
//!
//! Same errors-as-values policy as the basic calculator: domain violations
//! (asin outside [-1,1], log of a non-positive value, reciprocal of zero,
//! factorial of a negative or fractional number) return NaN rather than
//! failing.

/// Angle interpretation for the trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Deg,
    Rad,
}

/// Unary (or for [`ScientificOp::Pow`], binary) scientific operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Base-10 logarithm.
    Log,
    Ln,
    Exp,
    Square,
    Cube,
    Pow,
    Reciprocal,
    Factorial,
    Pi,
    E,
}

fn to_input_angle(value: f64, angle_mode: AngleMode) -> f64 {
    match angle_mode {
        AngleMode::Deg => value.to_radians(),
        AngleMode::Rad => value,
    }
}

fn from_result_angle(value: f64, angle_mode: AngleMode) -> f64 {
    match angle_mode {
        AngleMode::Deg => value.to_degrees(),
        AngleMode::Rad => value,
    }
}

pub fn sin(value: f64, angle_mode: AngleMode) -> f64 {
    to_input_angle(value, angle_mode).sin()
}

pub fn cos(value: f64, angle_mode: AngleMode) -> f64 {
    to_input_angle(value, angle_mode).cos()
}

pub fn tan(value: f64, angle_mode: AngleMode) -> f64 {
    to_input_angle(value, angle_mode).tan()
}

pub fn asin(value: f64, angle_mode: AngleMode) -> f64 {
    if !(-1.0..=1.0).contains(&value) {
        return f64::NAN;
    }
    from_result_angle(value.asin(), angle_mode)
}

pub fn acos(value: f64, angle_mode: AngleMode) -> f64 {
    if !(-1.0..=1.0).contains(&value) {
        return f64::NAN;
    }
    from_result_angle(value.acos(), angle_mode)
}

pub fn atan(value: f64, angle_mode: AngleMode) -> f64 {
    from_result_angle(value.atan(), angle_mode)
}

pub fn log(value: f64) -> f64 {
    if value <= 0.0 {
        return f64::NAN;
    }
    value.log10()
}

pub fn ln(value: f64) -> f64 {
    if value <= 0.0 {
        return f64::NAN;
    }
    value.ln()
}

pub fn reciprocal(value: f64) -> f64 {
    if value == 0.0 {
        return f64::NAN;
    }
    1.0 / value
}

/// Factorial over the calculator's f64 domain. Negative or non-integer input
/// is NaN; anything above 170 overflows f64 and returns infinity.
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Apply a scientific operation to the display value.
///
/// `second_value` is only consulted for [`ScientificOp::Pow`]; without it
/// the value passes through unchanged.
pub fn apply(
    op: ScientificOp,
    value: f64,
    angle_mode: AngleMode,
    second_value: Option<f64>,
) -> f64 {
    match op {
        ScientificOp::Sin => sin(value, angle_mode),
        ScientificOp::Cos => cos(value, angle_mode),
        ScientificOp::Tan => tan(value, angle_mode),
        ScientificOp::Asin => asin(value, angle_mode),
        ScientificOp::Acos => acos(value, angle_mode),
        ScientificOp::Atan => atan(value, angle_mode),
        ScientificOp::Log => log(value),
        ScientificOp::Ln => ln(value),
        ScientificOp::Exp => value.exp(),
        ScientificOp::Square => value * value,
        ScientificOp::Cube => value * value * value,
        ScientificOp::Pow => match second_value {
            Some(exponent) => value.powf(exponent),
            None => value,
        },
        ScientificOp::Reciprocal => reciprocal(value),
        ScientificOp::Factorial => factorial(value),
        ScientificOp::Pi => std::f64::consts::PI,
        ScientificOp::E => std::f64::consts::E,
    }
}
