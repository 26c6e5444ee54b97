use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_new() {
    let mut rng = StdRng::seed_from_u64(11);
    let layer = Layer::new(3, 4, &mut rng);
    assert_eq!(layer.nin(), 3);
    assert_eq!(layer.nout(), 4);
    assert_eq!(layer.activation(), Activation::Relu);
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));
}

#[test]
fn test_layer_evaluate_outputs_per_neuron() -> Result<(), ScalarGradError> {
    let layer = Layer::from_neurons(
        2,
        vec![
            Neuron::from_weights(vec![1.0, 2.0], 0.0),
            Neuron::from_weights(vec![-1.0, 0.5], 1.0),
        ],
        Activation::Tanh,
    )?;
    let out = layer.evaluate(&[0.5, -0.25])?;
    assert_eq!(out.len(), 2);
    assert_relative_eq!(out[0].data(), 0.0f64.tanh());
    assert_relative_eq!(out[1].data(), 0.375f64.tanh());
    Ok(())
}

#[test]
fn test_layer_single_neuron_still_returns_sequence() -> Result<(), ScalarGradError> {
    let layer = Layer::from_neurons(1, vec![Neuron::from_weights(vec![2.0], 0.0)], Activation::Relu)?;
    let out = layer.evaluate(&[3.0])?;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data(), 6.0);
    Ok(())
}

#[test]
fn test_layer_inputs_are_shared_between_neurons() -> Result<(), ScalarGradError> {
    let layer = Layer::from_neurons(
        1,
        vec![
            Neuron::from_weights(vec![2.0], 0.0),
            Neuron::from_weights(vec![3.0], 0.0),
        ],
        Activation::Relu,
    )?;
    let x = Value::new(1.0);
    let out = layer.evaluate(&[x.clone()])?;
    let total = &out[0] + &out[1];
    total.backward();
    // Both neurons contribute to the same input node.
    assert_eq!(x.grad(), 5.0);
    Ok(())
}

#[test]
fn test_layer_dimension_mismatch() {
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Layer::new(3, 2, &mut rng);
    assert_eq!(
        layer.evaluate(&[1.0, 2.0]).unwrap_err(),
        ScalarGradError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );

    let zero_width = Layer::new(2, 0, &mut rng);
    assert!(zero_width.evaluate(&[1.0]).is_err());
    assert!(zero_width.evaluate(&[1.0, 2.0]).unwrap().is_empty());
}

#[test]
fn test_layer_from_neurons_checks_fan_in() {
    let result = Layer::from_neurons(
        2,
        vec![
            Neuron::from_weights(vec![1.0, 1.0], 0.0),
            Neuron::from_weights(vec![1.0], 0.0),
        ],
        Activation::Relu,
    );
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_layer_parameter_order_and_names() -> Result<(), ScalarGradError> {
    let layer = Layer::from_neurons(
        1,
        vec![
            Neuron::from_weights(vec![1.0], 2.0),
            Neuron::from_weights(vec![3.0], 4.0),
        ],
        Activation::Relu,
    )?;
    let data: Vec<f64> = layer.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);

    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "neurons.0.weight.0",
            "neurons.0.bias",
            "neurons.1.weight.0",
            "neurons.1.bias"
        ]
    );
    Ok(())
}
