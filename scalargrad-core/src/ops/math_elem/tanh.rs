use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for `tanh`.
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d tanh(x)/dx = 1 - tanh(x)^2, chained with the upstream gradient
        let t = self.output_data;
        vec![(1.0 - t * t) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "tanh"
    }
}

/// Computes the hyperbolic tangent, `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// Evaluated with `f64::tanh`, which saturates to ±1 instead of producing NaN for large
/// inputs.
pub fn tanh_op(input: &Value) -> Value {
    let output_data = input.data().tanh();
    let grad_fn = TanhBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward() {
        assert_eq!(tanh_op(&Value::new(0.0)).data(), 0.0);
        let x: f64 = 0.8814;
        let e2x = (2.0 * x).exp();
        assert_relative_eq!(
            tanh_op(&Value::new(x)).data(),
            (e2x - 1.0) / (e2x + 1.0),
            epsilon = 1e-12
        );
        // Saturates rather than overflowing.
        assert_eq!(tanh_op(&Value::new(1000.0)).data(), 1.0);
        assert_eq!(tanh_op(&Value::new(-1000.0)).data(), -1.0);
    }

    #[test]
    fn test_tanh_backward_as_root() {
        let a = Value::new(0.5);
        let b = tanh_op(&a);
        b.backward();
        let t = 0.5f64.tanh();
        assert_relative_eq!(a.grad(), 1.0 - t * t);
    }

    #[test]
    fn test_tanh_backward_multiplies_upstream_gradient() {
        // tanh is not the backward root here: its rule must scale by the upstream gradient.
        let a = Value::new(0.5);
        let b = tanh_op(&a);
        let c = &b * 5.0;
        c.backward();
        let t = 0.5f64.tanh();
        assert_relative_eq!(a.grad(), 5.0 * (1.0 - t * t));
    }

    #[test]
    fn test_tanh_backward_grad_check() -> Result<(), GradCheckError> {
        check_grad(|v| Ok(&tanh_op(&v[0]) * &v[1]), &[-0.3, 2.0], 1e-6, 1e-6)
    }
}
