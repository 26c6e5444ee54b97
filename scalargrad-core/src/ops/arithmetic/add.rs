use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(a + b)/da = d(a + b)/db = 1
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

// --- Forward Operation ---

/// Adds two values, recording both as parents of the result.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let result = a.data() + b.data();
    let grad_fn = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Value::from_op(result, Rc::new(grad_fn))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
