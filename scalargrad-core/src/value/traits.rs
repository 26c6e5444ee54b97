// src/value/traits.rs

use crate::autograd::BackwardOp;
use crate::ops::arithmetic::add_op;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::fmt;
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: the new handle points to the same node, so gradients accumulated
    /// through one clone are visible through the others.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl Drop for Value {
    /// Releases the graph owned by this handle without recursing through it.
    ///
    /// A node's backward rule owns its parents, so the default drop glue would nest one call
    /// per level of the graph. When this is the last handle on the node, its rule is detached
    /// and the ancestry is torn down from an explicit work stack instead; every node reached
    /// that way has already lost its rule by the time its own handle is dropped.
    fn drop(&mut self) {
        if Rc::strong_count(&self.node) != 1 {
            return;
        }
        let Some(grad_fn) = take_grad_fn(&self.node) else {
            return;
        };

        let mut pending: Vec<Rc<dyn BackwardOp>> = vec![grad_fn];
        while let Some(grad_fn) = pending.pop() {
            // A rule still shared elsewhere (e.g. through `Value::grad_fn`) keeps its inputs.
            if Rc::strong_count(&grad_fn) != 1 {
                continue;
            }
            let inputs = grad_fn.inputs();
            // The rule's own handles go away here; `inputs` now holds the last ones for any
            // parent not referenced elsewhere.
            drop(grad_fn);
            for input in inputs {
                if Rc::strong_count(&input.node) == 1 {
                    if let Some(next) = take_grad_fn(&input.node) {
                        pending.push(next);
                    }
                }
            }
        }
    }
}

fn take_grad_fn(node: &RefCell<ValueData>) -> Option<Rc<dyn BackwardOp>> {
    node.try_borrow_mut().ok().and_then(|mut data| data.grad_fn.take())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match guard.grad_fn.as_ref() {
            Some(op) => write!(
                f,
                "Value(data={:?}, grad={:?}, op={})",
                guard.data,
                guard.grad,
                op.name()
            ),
            None => write!(f, "Value(data={:?}, grad={:?})", guard.data, guard.grad),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

// --- Auto-boxing: raw numbers become fresh leaves ---

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

// --- Summation (e.g. building a loss from per-sample terms) ---

impl Sum for Value {
    /// Chains `add_op` starting from a `0.0` leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}
