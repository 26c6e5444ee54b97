use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::init::fill_with_;
use scalargrad_core::{Activation, Module, MLP};

// Each test binary compiles this module separately, so not every helper is used everywhere.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 2 -> 4 -> 4 -> 1 network with fixed, non-degenerate parameters.
#[allow(dead_code)]
pub(crate) fn deterministic_mlp(activation: Activation) -> MLP {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = MLP::with_activation(2, &[4, 4, 1], activation, &mut rng);
    // Alternating signs in (-0.9, 0.9), away from zero.
    fill_with_(&mlp.parameters(), |i| {
        let magnitude = 0.15 + 0.7 * ((i * 7) % 11) as f64 / 11.0;
        if i % 2 == 0 {
            magnitude
        } else {
            -magnitude
        }
    });
    mlp
}

#[allow(dead_code)]
pub(crate) fn seeded_mlp(seed: u64, activation: Activation) -> MLP {
    let mut rng = StdRng::seed_from_u64(seed);
    MLP::with_activation(2, &[4, 4, 1], activation, &mut rng)
}
