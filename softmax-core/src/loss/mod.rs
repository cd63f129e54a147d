// src/loss/mod.rs

//! # Softmax Loss
//!
//! The softmax (cross-entropy) loss of a linear classifier and its gradient with
//! respect to the weights, in two interchangeable forms:
//!
//! - [`naive::softmax_loss_naive`]: explicit loops, one entry at a time.
//! - [`vectorized::softmax_loss_vectorized`]: matrix products and row-wise reductions.
//!
//! Both compute, for weights `W` (D, C), a batch `X` (N, D), labels `y` and a
//! regularization strength `reg`:
//!
//! ```text
//! loss = mean_i( -f_i[y_i] + log(sum_j exp(f_i[j])) ) + reg * sum(W * W)
//! dW   = Xᵀ · (softmax(F) - onehot(y)) / N + 2 * reg * W
//! ```
//!
//! with `F = X · W`. Scores are shifted by their row maximum before being
//! exponentiated, so large scores do not overflow.
//!
//! [`SoftmaxLoss`] holds a configured implementation choice and regularization
//! strength for callers that evaluate the objective repeatedly.

pub mod naive;
pub mod objective;
pub mod vectorized;

pub use naive::softmax_loss_naive;
pub use objective::{Implementation, SoftmaxLoss};
pub use vectorized::softmax_loss_vectorized;

use crate::error::SoftmaxError;
use crate::traits::SoftmaxNumeric;
use log::warn;
use ndarray::Array2;

/// The scalar loss and the gradient with respect to the weights.
pub type LossAndGrad<T> = (T, Array2<T>);

/// Rejects a loss or gradient holding `NaN` or an infinity.
pub(crate) fn ensure_finite<T: SoftmaxNumeric>(
    loss: T,
    grad: &Array2<T>,
    operation: &str,
) -> Result<(), SoftmaxError> {
    if loss.is_finite() && grad.iter().all(|g| g.is_finite()) {
        return Ok(());
    }
    warn!("{}: non-finite result (loss = {})", operation, loss);
    Err(SoftmaxError::NumericOverflow {
        operation: operation.to_string(),
    })
}
