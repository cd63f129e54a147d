// examples/softmax_sanity_check.rs
//!
//! This example runs the usual sanity checks on the softmax objective before it is
//! handed to an optimizer: the loss of near-zero weights is close to `ln(C)`, the
//! analytic gradient matches a numerical estimate at random entries (with and
//! without regularization), and the looped and vectorized kernels agree while
//! the vectorized one runs faster.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use softmax_core::{
    grad_check::grad_check_sparse,
    init::randn,
    ndarray::Array2,
    softmax_loss_naive, softmax_loss_vectorized,
    utils::testing::rel_error,
    SoftmaxError,
};
use std::time::Instant;

const NUM_TRAIN: usize = 500;
const NUM_FEATURES: usize = 3073;
const NUM_CLASSES: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(231);
    let x = randn(NUM_TRAIN, NUM_FEATURES, 1.0, &mut rng);
    let y: Vec<usize> = (0..NUM_TRAIN).map(|_| rng.gen_range(0..NUM_CLASSES)).collect();
    let w: Array2<f64> = randn(NUM_FEATURES, NUM_CLASSES, 1e-4, &mut rng);

    // --- Loss of small random weights ---
    let (loss, grad) = softmax_loss_naive(&w, &x, &y, 0.0)?;
    println!("loss: {:.6}", loss);
    println!("sanity check: {:.6}", -(0.1f64.ln()));

    // --- Gradient check, then again with regularization ---
    for reg in [0.0, 5e1] {
        let analytic = if reg == 0.0 {
            grad.clone()
        } else {
            softmax_loss_naive(&w, &x, &y, reg)?.1
        };
        println!("gradient check with reg = {}", reg);
        let samples = grad_check_sparse(
            |w_probe: &Array2<f64>| -> Result<f64, SoftmaxError> {
                Ok(softmax_loss_naive(w_probe, &x, &y, reg)?.0)
            },
            &w,
            &analytic,
            10,
            1e-5,
            &mut rng,
        )?;
        for s in samples {
            println!(
                "numerical: {:.6e} analytic: {:.6e}, relative error: {:.6e}",
                s.numerical, s.analytic, s.rel_error
            );
        }
    }

    // --- Naive vs vectorized ---
    let tic = Instant::now();
    let (loss_naive, grad_naive) = softmax_loss_naive(&w, &x, &y, 5e-6)?;
    let naive_time = tic.elapsed();
    println!("naive loss: {:e} computed in {:?}", loss_naive, naive_time);

    let tic = Instant::now();
    let (loss_vectorized, grad_vectorized) = softmax_loss_vectorized(&w, &x, &y, 5e-6)?;
    let vectorized_time = tic.elapsed();
    println!("vectorized loss: {:e} computed in {:?}", loss_vectorized, vectorized_time);

    println!("Loss difference: {:e}", (loss_naive - loss_vectorized).abs());
    println!("Gradient difference: {:e}", rel_error(&grad_naive, &grad_vectorized));

    Ok(())
}
