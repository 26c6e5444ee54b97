//! # scalargrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar [`Value`]s, plus the
//! feed-forward building blocks ([`Neuron`](nn::Neuron), [`Layer`](nn::Layer), [`MLP`](model::MLP))
//! composed entirely from the engine's operations.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = &(&a * &b) + 10.0;
//! c.backward();
//! assert_eq!(c.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod model;
pub mod nn;

pub mod error;

// Ré-exporte les types principaux pour qu'ils soient accessibles directement via `scalargrad_core::...`
pub use error::ScalarGradError;
pub use value::Value;
pub use autograd::{backward, topological_sort, BackwardOp, NodeId};
pub use model::MLP;
pub use nn::{Activation, Initializer, Layer, Module, Neuron, Parameter};
