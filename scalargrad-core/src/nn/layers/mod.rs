// src/nn/layers/mod.rs
// Module pour les différentes couches (Neuron, Layer)

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::Neuron;
