//! # Scalar Operations Module (`ops`)
//!
//! This module defines the primitive differentiable operations of the engine. Operations are
//! categorized into submodules based on their functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that performs
//!   the forward computation and attaches the backward rule for autograd. The `Value` methods
//!   and the `std::ops` overloads are thin wrappers around them.
//! - **`Backward` Structs:** Each primitive operation has a corresponding struct (e.g.
//!   `AddBackward`, `TanhBackward`) implementing the
//!   [`BackwardOp`](../autograd/backward_op/trait.BackwardOp.html) trait. It stores the operand
//!   handles and the local values captured during the forward pass.
//! - **Composite operations** (`neg`, `sub`, `div`) are defined in terms of the primitives and
//!   inherit their backward rules.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, tanh.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
