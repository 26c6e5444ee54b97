use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Layer, Module, Parameter};
use crate::value::{to_values, Value};
use log::debug;
use rand::Rng;

/// A multi-layer perceptron: a chain of fully connected layers, each feeding the next.
///
/// The layer widths are `[nin, nouts[0], nouts[1], ...]`; layer `k` maps `sizes[k]` inputs to
/// `sizes[k + 1]` outputs.
#[derive(Debug)]
pub struct MLP {
    nin: usize,
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates an MLP with ReLU on every layer, drawing parameters from the default initializer.
    ///
    /// # Example
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use scalargrad_core::{Module, MLP};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    /// assert_eq!(mlp.num_parameters(), 4 * 4 + 4 * 5 + 1 * 5);
    /// ```
    pub fn new<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Self {
        Self::with_activation(nin, nouts, Activation::Relu, rng)
    }

    pub fn with_activation<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Self::with_initializer(nin, nouts, activation, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Self {
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for &nout in nouts {
            layers.push(Layer::with_initializer(fan_in, nout, activation, init, rng));
            fan_in = nout;
        }
        let mlp = MLP { nin, layers };
        debug!(
            "MLP: created {} layers, {} parameters",
            mlp.layers.len(),
            mlp.num_parameters()
        );
        mlp
    }

    /// Assembles an MLP from existing layers.
    ///
    /// # Errors
    /// `DimensionMismatch` if a layer's fan-in differs from the previous layer's width
    /// (or from `nin` for the first layer).
    pub fn from_layers(nin: usize, layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        let mut expected = nin;
        for layer in &layers {
            if layer.nin() != expected {
                return Err(ScalarGradError::DimensionMismatch {
                    expected,
                    actual: layer.nin(),
                });
            }
            expected = layer.nout();
        }
        Ok(MLP { nin, layers })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Width of the last layer (`nin` for an MLP without layers).
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(self.nin, Layer::nout)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Runs `inputs` through every layer in order and returns the last layer's outputs.
    ///
    /// A final layer of width 1 still yields a one-element sequence.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != self.nin()`.
    pub fn evaluate<X>(&self, inputs: &[X]) -> Result<Vec<Value>, ScalarGradError>
    where
        X: Clone + Into<Value>,
    {
        self.evaluate_values(to_values(inputs))
    }

    fn evaluate_values(&self, inputs: Vec<Value>) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.nin {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.nin,
                actual: inputs.len(),
            });
        }
        self.layers
            .iter()
            .try_fold(inputs, |current, layer| layer.evaluate_values(&current))
    }
}

impl Module for MLP {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.evaluate_values(inputs.to_vec())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (k, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", k, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
