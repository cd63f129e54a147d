// src/init.rs

use crate::traits::SoftmaxNumeric;
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a (rows, cols) matrix with entries drawn from `scale * N(0, 1)`.
///
/// A small scale (e.g. `1e-4`) gives the near-zero starting weights for which
/// the loss of a C-class classifier is close to `ln(C)`.
///
/// # Arguments
/// * `rows`, `cols`: Shape of the matrix, (D, C) for classifier weights.
/// * `scale`: Standard deviation of the entries.
/// * `rng`: Random number generator; seed it for reproducible weights.
pub fn randn<T, R>(rows: usize, cols: usize, scale: T, rng: &mut R) -> Array2<T>
where
    T: SoftmaxNumeric,
    StandardNormal: Distribution<T>,
    R: Rng,
{
    Array2::from_shape_simple_fn((rows, cols), || {
        let z: T = StandardNormal.sample(&mut *rng);
        scale * z
    })
}
