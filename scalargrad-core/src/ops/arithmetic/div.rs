use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_unchecked;
use crate::value::Value;

/// Divides `a` by `b`. Defined as `a * b^-1`.
///
/// Division by a zero-valued node follows IEEE semantics (infinite or NaN data); it is not an
/// error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_unchecked(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
