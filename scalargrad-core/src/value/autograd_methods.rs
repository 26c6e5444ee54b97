use crate::autograd::{self, BackwardOp};
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Resets the accumulated gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Returns a clone of the `Rc` pointing to the backward rule (`grad_fn`), if any.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Name of the operation that produced this node, `None` for leaves.
    pub fn op_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(|op| op.name())
    }

    /// Returns the nodes this one was derived from (empty for leaves).
    pub fn parents(&self) -> Vec<Value> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0` and propagates to every ancestor in reverse
    /// topological order. See [`autograd::backward`].
    pub fn backward(&self) {
        autograd::backward(self)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
