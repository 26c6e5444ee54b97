use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a value. Defined as `a * -1`, so the result is a `mul` node whose second parent
/// is a fresh `-1` leaf.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
