// src/value_data.rs

use crate::autograd::BackwardOp;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Holds the state of a single node of the computation graph.
///
/// This struct is always accessed through the `Rc<RefCell<ValueData>>` held by a
/// [`Value`](crate::value::Value) handle; it is never exposed directly.
pub struct ValueData {
    /// Forward result. Set once by the producing operation; leaves may be updated
    /// through `Value::set_data` between forward passes.
    pub data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    pub grad: f64,
    /// Backward rule of the operation that produced this node. `None` for leaves.
    /// The rule also owns the handles on the node's parents.
    pub grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates the data of a leaf node: no parents, zero gradient.
    pub fn new_leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
        }
    }

    /// Creates the data of a node produced by an operation.
    pub fn new_with_grad_fn(data: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.grad_fn.as_ref().map(|op| op.name()))
            .finish()
    }
}
