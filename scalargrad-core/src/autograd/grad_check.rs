use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input at index {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Value error during gradient check: {0}")]
    ValueError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Checks analytical gradients of `func` against central finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and must build its output from them.
/// The analytical gradient of every input is obtained with a single backward pass; the
/// numerical one as `(f(x + eps) - f(x - eps)) / (2 eps)`, rebuilding the graph each time.
///
/// A gradient passes when either the absolute or the relative difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Forward and backward pass for analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Finite differences, one input at a time ---
    let evaluate_with = |index: usize, shifted: f64| -> Result<f64, GradCheckError> {
        let perturbed: Vec<Value> = inputs
            .iter()
            .enumerate()
            .map(|(j, &x)| Value::new(if j == index { shifted } else { x }))
            .collect();
        let out = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.data())
    };

    for (i, &x) in inputs.iter().enumerate() {
        let loss_plus = evaluate_with(i, x + epsilon)?;
        let loss_minus = evaluate_with(i, x - epsilon)?;
        compare_gradients(
            i,
            analytical_grads[i],
            loss_plus,
            loss_minus,
            epsilon,
            tolerance,
        )?;
    }

    debug!("check_grad: {} inputs passed", inputs.len());
    Ok(())
}

/// Checks the gradients of model parameters against central finite differences.
///
/// `func` rebuilds the scalar output from the *current* parameter data (typically a forward
/// pass of the model that owns `params`). Parameter gradients are zeroed, then filled by one
/// backward pass; each parameter's data is then nudged by `±epsilon` and always restored,
/// even when the check fails. On return the parameters hold the analytical gradients.
pub fn check_parameter_grads<F>(
    params: &[&Parameter],
    func: F,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn() -> Result<Value, ScalarGradError>,
{
    for param in params {
        param.zero_grad();
    }
    let output = func().map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    drop(output);
    let analytical_grads: Vec<f64> = params.iter().map(|p| p.grad()).collect();

    let evaluate_with = |param: &Parameter, shifted: f64| -> Result<f64, GradCheckError> {
        param.set_data(shifted)?;
        let out = func().map_err(GradCheckError::ForwardPassError)?;
        Ok(out.data())
    };

    for (i, &param) in params.iter().enumerate() {
        let original = param.data();
        let losses = evaluate_with(param, original + epsilon)
            .and_then(|plus| Ok((plus, evaluate_with(param, original - epsilon)?)));
        // Restore before looking at the result.
        param.set_data(original)?;
        let (loss_plus, loss_minus) = losses?;

        compare_gradients(
            i,
            analytical_grads[i],
            loss_plus,
            loss_minus,
            epsilon,
            tolerance,
        )?;
    }

    debug!("check_parameter_grads: {} parameters passed", params.len());
    Ok(())
}

fn compare_gradients(
    input_index: usize,
    analytical_grad: f64,
    loss_plus: f64,
    loss_minus: f64,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

    if !numerical_grad.is_finite() {
        return Err(GradCheckError::NumericalGradNaNOrInfinite {
            input_index,
            loss_plus,
            loss_minus,
        });
    }
    if !analytical_grad.is_finite() {
        return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
            input_index,
            value: analytical_grad,
        });
    }

    let difference = (analytical_grad - numerical_grad).abs();
    if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
        return Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            difference,
        });
    }
    Ok(())
}
