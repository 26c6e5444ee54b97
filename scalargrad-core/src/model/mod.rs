//! Multi-layer perceptron built from [`Layer`](crate::nn::Layer)s.

pub mod mlp;

pub use mlp::MLP;
