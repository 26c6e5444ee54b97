use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
    input_data: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // grad = upstream_grad * (input > 0)
        let grad = if self.input_data > 0.0 { grad_output } else { 0.0 };
        vec![grad]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "relu"
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
///
/// The derivative at exactly `0` is taken as `0`.
pub fn relu_op(input: &Value) -> Value {
    let input_data = input.data();
    let output_data = if input_data > 0.0 { input_data } else { 0.0 };
    let grad_fn = ReluBackward {
        input: input.clone(),
        input_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
