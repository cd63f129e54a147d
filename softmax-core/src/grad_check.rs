// src/grad_check.rs

use crate::error::SoftmaxError;
use crate::traits::SoftmaxNumeric;
use log::debug;
use ndarray::Array2;
use rand::Rng;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed at entry ({row}, {col}): Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        row: usize,
        col: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite at entry ({row}, {col}). Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        row: usize,
        col: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite at entry ({row}, {col}). Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { row: usize, col: usize, value: f64 },
    #[error("Analytical gradient has shape {actual:?}, weights have shape {expected:?}")]
    GradShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Finite difference step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("Loss evaluation failed during gradient check: {0}")]
    LossError(SoftmaxError),
}

impl From<SoftmaxError> for GradCheckError {
    fn from(err: SoftmaxError) -> Self {
        GradCheckError::LossError(err)
    }
}

/// One sampled entry of [`grad_check_sparse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckSample {
    pub row: usize,
    pub col: usize,
    pub numerical: f64,
    pub analytic: f64,
    /// `|numerical - analytic| / (|numerical| + |analytic|)`, 0 when both are 0.
    pub rel_error: f64,
}

fn to_f64<T: SoftmaxNumeric>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn step_from_f64<T: SoftmaxNumeric>(h: f64) -> Result<T, GradCheckError> {
    if !(h.is_finite() && h > 0.0) {
        return Err(GradCheckError::InvalidStep(h));
    }
    T::from(h).ok_or(GradCheckError::InvalidStep(h))
}

fn check_grad_shape<T>(w: &Array2<T>, analytic: &Array2<T>) -> Result<(), GradCheckError> {
    if w.shape() != analytic.shape() {
        return Err(GradCheckError::GradShapeMismatch {
            expected: w.shape().to_vec(),
            actual: analytic.shape().to_vec(),
        });
    }
    Ok(())
}

/// Evaluates `f` at `w[row, col] + h` and `w[row, col] - h`, restoring the entry afterwards.
fn probe<T, F>(
    f: &mut F,
    w: &mut Array2<T>,
    row: usize,
    col: usize,
    h: T,
) -> Result<(T, T), SoftmaxError>
where
    T: SoftmaxNumeric,
    F: FnMut(&Array2<T>) -> Result<T, SoftmaxError>,
{
    let old = w[[row, col]];
    w[[row, col]] = old + h;
    let plus = f(&*w);
    w[[row, col]] = old - h;
    let minus = f(&*w);
    w[[row, col]] = old;
    Ok((plus?, minus?))
}

/// Numerical gradient of a scalar function `f` at `w`, by central differences
/// `(f(w + h e_ij) - f(w - h e_ij)) / 2h` over every entry.
///
/// # Arguments
/// * `f`: The function to differentiate, typically a loss with fixed `X`, `y` and `reg`.
/// * `w`: The point at which to evaluate the gradient.
/// * `h`: The finite difference step.
pub fn eval_numerical_gradient<T, F>(
    mut f: F,
    w: &Array2<T>,
    h: f64,
) -> Result<Array2<T>, GradCheckError>
where
    T: SoftmaxNumeric,
    F: FnMut(&Array2<T>) -> Result<T, SoftmaxError>,
{
    let h_t = step_from_f64::<T>(h)?;
    let two_h = h_t + h_t;
    let mut probe_w = w.clone();
    let mut grad = Array2::<T>::zeros(w.raw_dim());

    for ((row, col), g) in grad.indexed_iter_mut() {
        let (plus, minus) = probe(&mut f, &mut probe_w, row, col, h_t)?;
        *g = (plus - minus) / two_h;
    }
    Ok(grad)
}

/// Checks an analytical gradient against numerical gradients using finite differences.
///
/// Every entry is compared; an entry fails when both its absolute difference and
/// its difference relative to `|analytic| + epsilon` exceed `tolerance`.
///
/// # Errors
/// The first failing entry as [`GradCheckError::GradientMismatch`], or a
/// NaN/infinite gradient, shape or loss evaluation error.
pub fn check_grad<T, F>(
    mut f: F,
    w: &Array2<T>,
    analytic: &Array2<T>,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: SoftmaxNumeric,
    F: FnMut(&Array2<T>) -> Result<T, SoftmaxError>,
{
    check_grad_shape(w, analytic)?;
    let h = step_from_f64::<T>(epsilon)?;
    let mut probe_w = w.clone();

    for ((row, col), &analytical) in analytic.indexed_iter() {
        let (plus, minus) = probe(&mut f, &mut probe_w, row, col, h)?;
        let (loss_plus, loss_minus) = (to_f64(plus), to_f64(minus));
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = to_f64(analytical);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                row,
                col,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                row,
                col,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                row,
                col,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Compares the analytical gradient with numerical estimates at `num_checks`
/// randomly chosen entries and reports each comparison.
///
/// Unlike [`check_grad`] nothing is judged here; callers inspect `rel_error`
/// (values around 1e-7 or below indicate a correct gradient).
pub fn grad_check_sparse<T, F, R>(
    mut f: F,
    w: &Array2<T>,
    analytic: &Array2<T>,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Result<Vec<GradCheckSample>, GradCheckError>
where
    T: SoftmaxNumeric,
    F: FnMut(&Array2<T>) -> Result<T, SoftmaxError>,
    R: Rng,
{
    check_grad_shape(w, analytic)?;
    let h_t = step_from_f64::<T>(h)?;
    let (rows, cols) = w.dim();
    if rows == 0 || cols == 0 {
        return Ok(Vec::new());
    }

    let mut probe_w = w.clone();
    let mut samples = Vec::with_capacity(num_checks);
    for _ in 0..num_checks {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let (plus, minus) = probe(&mut f, &mut probe_w, row, col, h_t)?;
        let numerical = (to_f64(plus) - to_f64(minus)) / (2.0 * h);
        let analytic_value = to_f64(analytic[[row, col]]);
        let denom = numerical.abs() + analytic_value.abs();
        let rel_error = if denom == 0.0 {
            0.0
        } else {
            (numerical - analytic_value).abs() / denom
        };
        debug!(
            "grad_check_sparse: ({}, {}) numerical: {:e} analytic: {:e}, relative error: {:e}",
            row, col, numerical, analytic_value, rel_error
        );
        samples.push(GradCheckSample {
            row,
            col,
            numerical,
            analytic: analytic_value,
            rel_error,
        });
    }
    Ok(samples)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
