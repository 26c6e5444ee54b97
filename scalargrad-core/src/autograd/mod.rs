//! # Autograd
//!
//! Reverse-mode differentiation over the dynamic graph built by the operations in
//! [`ops`](crate::ops):
//! - [`BackwardOp`]: the per-operation backward rule stored on every non-leaf node.
//! - [`graph`]: topological ordering and the backward driver.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{backward, topological_sort, NodeId};
