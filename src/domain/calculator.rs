// ============================================================
// Layer 3 — Arithmetic
// ============================================================
// The six operations the calculator offers, as plain functions
// over f64. Nothing here reads input, prints, or logs.

use super::error::CalcError;

/// Smallest positive subnormal f64. A divisor whose magnitude
/// falls below it is zero for every practical purpose.
pub const EPSILON: f64 = 4.940_656_458_412_465_4e-324;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails instead of returning Infinity when `b` is zero (either sign).
/// A NaN divisor is let through and yields NaN.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b.abs() < EPSILON {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root of `value`; negative input gives NaN, not an error.
pub fn sqrt(value: f64) -> f64 {
    if value < 0.0 {
        return f64::NAN;
    }
    value.sqrt()
}
