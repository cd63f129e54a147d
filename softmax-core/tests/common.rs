use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use softmax_core::init::randn;
use softmax_core::ndarray::Array2;

/// A random classification problem: weights, batch, labels and regularization.
#[allow(dead_code)]
pub(crate) struct Problem {
    pub w: Array2<f64>,
    pub x: Array2<f64>,
    pub y: Vec<usize>,
    pub reg: f64,
}

// Helper to create a reproducible random problem for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn random_problem(
    seed: u64,
    n: usize,
    d: usize,
    c: usize,
    w_scale: f64,
    reg: f64,
) -> Problem {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = randn(d, c, w_scale, &mut rng);
    let x = randn(n, d, 1.0, &mut rng);
    let y = (0..n).map(|_| rng.gen_range(0..c)).collect();
    Problem { w, x, y, reg }
}
