use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for raising a value to a fixed scalar exponent.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(x^k)/dx = k * x^(k-1)
        let local = self.exponent * self.base_data.powf(self.exponent - 1.0);
        vec![local * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }

    fn name(&self) -> &'static str {
        "pow"
    }
}

// --- Forward Operation ---

/// Raises `base` to the power `exponent`.
///
/// The exponent is a plain number, not a node: no gradient flows into it.
///
/// # Errors
/// `InvalidExponent` if `exponent` is NaN or infinite. No node is created in that case.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    Ok(pow_unchecked(base, exponent))
}

/// `pow_op` for exponents already known to be finite.
pub(crate) fn pow_unchecked(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    let grad_fn = PowBackward {
        base: base.clone(),
        base_data,
        exponent,
    };
    Value::from_op(base_data.powf(exponent), Rc::new(grad_fn))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
