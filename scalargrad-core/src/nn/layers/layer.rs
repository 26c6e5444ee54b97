use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Module, Neuron, Parameter};
use crate::value::{to_values, Value};
use log::debug;
use rand::Rng;

/// A fully connected layer: `nout` independent neurons applied to the same inputs.
#[derive(Debug)]
pub struct Layer {
    nin: usize,
    neurons: Vec<Neuron>,
    activation: Activation,
}

impl Layer {
    /// Creates a ReLU layer of `nout` neurons, each with fan-in `nin`, drawn from the default
    /// initializer.
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        Self::with_activation(nin, nout, Activation::Relu, rng)
    }

    pub fn with_activation<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Self::with_initializer(nin, nout, activation, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_initializer(nin, init, rng))
            .collect();
        debug!("Layer: created {} -> {} ({:?})", nin, nout, activation);
        Layer {
            nin,
            neurons,
            activation,
        }
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// `DimensionMismatch` if a neuron's fan-in differs from `nin`.
    pub fn from_neurons(
        nin: usize,
        neurons: Vec<Neuron>,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer {
            nin,
            neurons,
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Applies every neuron to `inputs` (values or raw numbers) and returns the `nout`
    /// outputs, in neuron order. Raw numbers are boxed once and shared by all neurons.
    ///
    /// Always returns a sequence, even for a single neuron.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != self.nin()`.
    pub fn evaluate<X>(&self, inputs: &[X]) -> Result<Vec<Value>, ScalarGradError>
    where
        X: Clone + Into<Value>,
    {
        self.evaluate_values(&to_values(inputs))
    }

    pub(crate) fn evaluate_values(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.nin {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.nin,
                actual: inputs.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.evaluate_values(inputs, self.activation))
            .collect()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.evaluate_values(inputs)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
