// src/nn/mod.rs
// Module principal pour les briques de réseau de neurones (neurone, couche, ...)

pub mod activation;
pub mod init;
pub mod layers;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use activation::Activation;
pub use init::Initializer;
pub use layers::{Layer, Neuron};
pub use module::Module;
pub use parameter::Parameter;
