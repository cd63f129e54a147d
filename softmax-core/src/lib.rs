//! # softmax-core
//!
//! Softmax (cross-entropy) loss and its gradient for a linear classifier with
//! weights `W` of shape (D, C), evaluated on a batch `X` of shape (N, D) with
//! labels `y`. The objective is provided twice, as a looped reference
//! ([`softmax_loss_naive`]) and as a vectorized kernel
//! ([`softmax_loss_vectorized`]); both return the same loss and gradient up to
//! floating-point rounding.
//!
//! Everything around the objective (data loading, the optimizer, the training
//! loop) belongs to the caller.

// Déclare les modules principaux de la crate
pub mod classifier;
pub mod error;
pub mod grad_check;
pub mod init;
pub mod loss;
pub mod ops;
pub mod traits;
pub mod utils;

mod validate;

pub use error::SoftmaxError;
pub use loss::{
    softmax_loss_naive, softmax_loss_vectorized, Implementation, LossAndGrad, SoftmaxLoss,
};
pub use traits::SoftmaxNumeric;
// Re-export crates appearing in public signatures
pub use ndarray;
pub use num_traits;
