// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activations applied by neurons.
//!
//! ## Currently Implemented:
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit.
//!
//! `tanh` lives in [`math_elem`](crate::ops::math_elem) since it is also a plain
//! element-wise function.

pub mod relu;

// Re-export key functions
pub use relu::relu_op;
