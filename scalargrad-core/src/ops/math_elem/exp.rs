use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for `exp`.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    // exp(x) is its own derivative, so the forward result is all we need.
    output_data: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.output_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "exp"
    }
}

/// Computes `e^x`.
pub fn exp_op(input: &Value) -> Value {
    let output_data = input.data().exp();
    let grad_fn = ExpBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(grad_fn))
}
