// src/value/mod.rs

use crate::autograd::{BackwardOp, NodeId};
use crate::error::ScalarGradError;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

// --- Implementation modules ---
mod arithmetic_ops;
mod autograd_methods;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the parent of many children; every child (through
///     its backward rule) and every caller holds a cheap handle on the same node.
/// 2.  **Interior Mutability:** the gradient accumulates through shared handles during the
///     backward pass.
///
/// The graph is single-threaded by construction (`Value` is neither `Send` nor `Sync`).
/// Dropping the last handle on an output releases every intermediate node it kept alive.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf node: `data`, zero gradient, no parents.
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::new_leaf(data))),
        }
    }

    /// Creates a node produced by an operation, with its backward rule.
    ///
    /// This is the extension point for custom differentiable operations: implement
    /// [`BackwardOp`] (holding handles on the operands) and wrap the forward result here.
    pub fn from_op(data: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::new_with_grad_fn(data, grad_fn))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Replaces the value of a leaf node.
    ///
    /// This is how an optimizer updates parameters between forward passes. Nodes produced by
    /// an operation keep the value they were computed with.
    ///
    /// # Errors
    /// `NonLeafMutation` if this node was produced by an operation.
    pub fn set_data(&self, data: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(ScalarGradError::NonLeafMutation);
        }
        guard.data = data;
        Ok(())
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Identity of the underlying node, shared by every clone of this handle.
    pub fn id(&self) -> NodeId {
        NodeId::new(Rc::as_ptr(&self.node))
    }

    pub fn exp(&self) -> Value {
        crate::ops::math_elem::exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        crate::ops::math_elem::tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        crate::ops::activation::relu_op(self)
    }

    /// Raises this value to a fixed real `exponent`. No gradient flows into the exponent.
    ///
    /// # Errors
    /// `InvalidExponent` if `exponent` is NaN or infinite.
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        crate::ops::arithmetic::pow_op(self, exponent)
    }
}

/// Converts an ordered sequence of values or raw numbers into graph nodes.
///
/// Raw numbers are wrapped as fresh leaves; `Value`s (and `&Value`s) are shared, not copied.
pub fn to_values<X>(inputs: &[X]) -> Vec<Value>
where
    X: Clone + Into<Value>,
{
    inputs.iter().cloned().map(Into::into).collect()
}
