use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Module, Parameter};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::{to_values, Value};
use rand::Rng;

/// A single neuron: `activation(bias + Σ w_i * x_i)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and one bias, each drawn uniformly from `[-1, 1]`
    /// with `rng`.
    pub fn new<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        Self::with_initializer(nin, &Initializer::default(), rng)
    }

    /// Creates a neuron whose weights and bias are drawn from `init`.
    pub fn with_initializer<R: Rng + ?Sized>(nin: usize, init: &Initializer, rng: &mut R) -> Self {
        let weights = (0..nin).map(|_| Parameter::new(init.sample(rng))).collect();
        let bias = Parameter::new(init.sample(rng));
        Neuron { weights, bias }
    }

    /// Creates a neuron with the given parameter values.
    pub fn from_weights(weights: Vec<f64>, bias: f64) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
        }
    }

    /// Fan-in: the number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Evaluates the neuron on `inputs` (values or raw numbers) with the given activation.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != self.nin()`.
    pub fn evaluate<X>(&self, inputs: &[X], activation: Activation) -> Result<Value, ScalarGradError>
    where
        X: Clone + Into<Value>,
    {
        self.evaluate_values(&to_values(inputs), activation)
    }

    pub(crate) fn evaluate_values(
        &self,
        inputs: &[Value],
        activation: Activation,
    ) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.nin() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.nin(),
                actual: inputs.len(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.value().clone(), |acc, (w, x)| {
                add_op(&acc, &mul_op(w, x))
            });
        Ok(activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    /// Evaluates with the default activation (ReLU) and returns a single output.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.evaluate_values(inputs, Activation::default())?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
