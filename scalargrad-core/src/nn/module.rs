use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;
use log::debug;

/// The base trait for all network building blocks (neurons, layers, models).
///
/// This trait defines the operations every block supports: a forward pass over an ordered
/// sequence of values, and access to its learnable parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: the ordered input values; the length must match the module's fan-in.
    ///
    /// # Returns
    /// The ordered output values, or `DimensionMismatch` if `inputs` has the wrong length.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, flattened and in declaration order
    /// (each neuron's weights, then its bias). The order is stable, so an optimizer can
    /// pair it with per-parameter state.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.weight.2"`), in the same order as [`parameters`](Module::parameters).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    ///
    /// Intermediate nodes of previous forward passes are not touched. Call this before each
    /// new backward pass: gradients accumulate otherwise.
    fn zero_grad(&self) {
        let params = self.parameters();
        debug!("zero_grad: resetting {} parameters", params.len());
        for param in params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Module pour les tests
    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            if inputs.len() != 1 {
                return Err(ScalarGradError::DimensionMismatch {
                    expected: 1,
                    actual: inputs.len(),
                });
            }
            Ok(vec![&inputs[0] * self.param.value()])
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            vec![("param".to_string(), &self.param)]
        }
    }

    #[test]
    fn test_module_parameters_retrieval() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Parameter::new(2.0),
        };
        let out = module.forward(&[Value::new(3.0)])?;
        assert_eq!(out[0].data(), 6.0);
        assert_eq!(module.num_parameters(), 1);
        assert_eq!(module.named_parameters()[0].0, "param");
        Ok(())
    }

    #[test]
    fn test_module_zero_grad() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Parameter::new(2.0),
        };
        let x = Value::new(3.0);
        let out = module.forward(&[x.clone()])?;
        out[0].backward();
        assert_eq!(module.param.grad(), 3.0);

        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        // Only parameters are reset.
        assert_eq!(x.grad(), 2.0);
        assert_eq!(out[0].grad(), 1.0);

        // Idempotent.
        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_module_forward_dimension_mismatch() {
        let module = MockModule {
            param: Parameter::new(1.0),
        };
        assert_eq!(
            module.forward(&[]).unwrap_err(),
            ScalarGradError::DimensionMismatch {
                expected: 1,
                actual: 0
            }
        );
    }
}
