use crate::value::Value;
use crate::value_data::ValueData;
use log::{debug, trace, warn};
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a node in the computation graph.
///
/// Derived from the address of the node's shared `RefCell<ValueData>`, so every clone of a
/// [`Value`] handle maps to the same `NodeId`. The id stays valid as long as any handle on the
/// node is alive, which the graph guarantees for the duration of a backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(*const RefCell<ValueData>);

impl NodeId {
    pub(crate) fn new(ptr: *const RefCell<ValueData>) -> Self {
        NodeId(ptr)
    }
}

/// Builds a topological sort of the computation graph rooted at `root`.
///
/// Depth-first: a node's parents are visited before the node itself is appended, and a
/// visited set ensures shared ancestors appear exactly once. Every node therefore appears
/// after all of its parents, and `root` is last.
///
/// Uses an explicit work stack instead of recursion so that very deep graphs cannot exhaust
/// the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, parents_done): a node is re-pushed with `true` after its parents were scheduled,
    // and is emitted once everything above it on the stack has been emitted.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, parents_done)) = stack.pop() {
        if parents_done {
            trace!("[topological_sort] Adding node {:?} to sorted_list", node.id());
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            trace!("[topological_sort] Node {:?} already visited.", node.id());
            continue;
        }

        let parents = node.parents();
        stack.push((node, true));
        // Reverse so the first parent is explored first.
        for parent in parents.into_iter().rev() {
            if !visited.contains(&parent.id()) {
                stack.push((parent, false));
            }
        }
    }

    sorted_list
}

/// Performs the backward pass starting from `root`.
///
/// Seeds `root.grad = 1.0`, orders the graph with [`topological_sort`], then walks it in
/// reverse (root first, leaves last), running each node's backward rule exactly once and
/// accumulating (`+=`) every contribution into the corresponding parent's gradient.
///
/// Calling this on a leaf only seeds the leaf. Gradients are never reset here: call
/// `zero_grad` on the parameters before a new pass.
///
/// # Panics
/// If a [`BackwardOp`](crate::autograd::BackwardOp) returns a different number of contributions than it has inputs.
pub fn backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    debug!("backward: {} nodes in topological order", sorted_nodes.len());

    {
        let mut root_guard = root.write_data();
        if root_guard.grad != 0.0 {
            warn!(
                "backward: root {:?} already has grad {}; the seed overwrites it",
                root.id(),
                root_guard.grad
            );
        }
        root_guard.grad = 1.0;
    }

    for node in sorted_nodes.iter().rev() {
        // The read borrow must be dropped before parents are borrowed mutably.
        let (grad_output, grad_fn) = {
            let guard = node.read_data();
            (guard.grad, guard.grad_fn.clone())
        };
        let Some(grad_fn) = grad_fn else {
            continue;
        };

        let inputs = grad_fn.inputs();
        let input_grads = grad_fn.backward(grad_output);
        assert_eq!(
            inputs.len(),
            input_grads.len(),
            "BackwardOp '{}' returned {} gradients for {} inputs",
            grad_fn.name(),
            input_grads.len(),
            inputs.len()
        );
        trace!(
            "[backward] {:?} ({}) grad={} -> {:?}",
            node.id(),
            grad_fn.name(),
            grad_output,
            input_grads
        );

        for (input, grad_to_add) in inputs.iter().zip(input_grads) {
            input.write_data().grad += grad_to_add;
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
