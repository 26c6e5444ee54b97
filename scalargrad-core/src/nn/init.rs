use crate::error::ScalarGradError;
use crate::nn::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution used to draw initial parameter values.
///
/// The random source itself is always supplied by the caller, so a seeded generator gives
/// reproducible models. The default is uniform on `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Initializer {
    kind: InitKind,
}

#[derive(Debug, Clone)]
enum InitKind {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Initializer {
    /// Uniform distribution on the closed interval `[low, high]`.
    ///
    /// # Errors
    /// `InvalidInitializer` if the range is not finite or `low > high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self, ScalarGradError> {
        if !(high - low).is_finite() || low > high {
            return Err(ScalarGradError::InvalidInitializer(format!(
                "uniform range [{}, {}] must be finite and non-empty",
                low, high
            )));
        }
        Ok(Initializer {
            kind: InitKind::Uniform(Uniform::new_inclusive(low, high)),
        })
    }

    /// Normal distribution with the given mean and standard deviation.
    ///
    /// # Errors
    /// `InvalidInitializer` if the mean is not finite or `std_dev` is negative or not finite.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, ScalarGradError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ScalarGradError::InvalidInitializer(format!(
                "normal(mean={}, std_dev={}) needs a finite mean and a finite, non-negative std_dev",
                mean, std_dev
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| ScalarGradError::InvalidInitializer(e.to_string()))?;
        Ok(Initializer {
            kind: InitKind::Normal(normal),
        })
    }

    /// Draws one value from the distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.kind {
            InitKind::Uniform(dist) => dist.sample(rng),
            InitKind::Normal(dist) => dist.sample(rng),
        }
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer {
            kind: InitKind::Uniform(Uniform::new_inclusive(-1.0, 1.0)),
        }
    }
}

/// Re-draws every parameter from `init`. Gradients are left untouched.
pub fn reset_parameters_<R: Rng + ?Sized>(params: &[&Parameter], init: &Initializer, rng: &mut R) {
    for param in params {
        set_parameter(param, init.sample(rng));
    }
}

/// Sets every parameter to `f(index)`, for deterministic models in tests and examples.
pub fn fill_with_<F>(params: &[&Parameter], mut f: F)
where
    F: FnMut(usize) -> f64,
{
    for (i, param) in params.iter().enumerate() {
        set_parameter(param, f(i));
    }
}

/// Sets every parameter to 0.
pub fn zeros_(params: &[&Parameter]) {
    fill_with_(params, |_| 0.0);
}

fn set_parameter(param: &Parameter, data: f64) {
    // Parameters are leaves by construction, so the update cannot be refused.
    param.value().write_data().data = data;
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
