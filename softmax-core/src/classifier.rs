// src/classifier.rs

//! Inference helpers for a trained linear softmax classifier: raw class scores,
//! class probabilities and predicted labels for a batch.

use crate::error::SoftmaxError;
use crate::ops::softmax::softmax_rows;
use crate::traits::SoftmaxNumeric;
use crate::validate::check_score_shapes;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};

/// Class scores `X · W`, shape (N, C).
pub fn scores<T, S1, S2>(
    w: &ArrayBase<S1, Ix2>,
    x: &ArrayBase<S2, Ix2>,
) -> Result<Array2<T>, SoftmaxError>
where
    T: SoftmaxNumeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let (w, x) = (w.view(), x.view());
    check_score_shapes(&w, &x, "scores")?;
    Ok(x.dot(&w))
}

/// Softmax probabilities of every class for every example, shape (N, C).
pub fn predict_proba<T, S1, S2>(
    w: &ArrayBase<S1, Ix2>,
    x: &ArrayBase<S2, Ix2>,
) -> Result<Array2<T>, SoftmaxError>
where
    T: SoftmaxNumeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    Ok(softmax_rows(&scores(w, x)?))
}

/// Predicted label of every example: the class with the highest score.
/// Ties go to the lowest class index.
///
/// # Errors
/// `ShapeMismatch` if `X` and `W` do not multiply, `UnsupportedOperation` if
/// `W` has no classes.
pub fn predict<T, S1, S2>(
    w: &ArrayBase<S1, Ix2>,
    x: &ArrayBase<S2, Ix2>,
) -> Result<Vec<usize>, SoftmaxError>
where
    T: SoftmaxNumeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    if w.ncols() == 0 {
        return Err(SoftmaxError::UnsupportedOperation(
            "Cannot predict with zero classes".to_string(),
        ));
    }
    let scores = scores(w, x)?;
    Ok(scores
        .axis_iter(Axis(0))
        .map(|row| {
            row.iter()
                .enumerate()
                .fold((0, T::neg_infinity()), |(best, best_score), (j, &s)| {
                    if s > best_score {
                        (j, s)
                    } else {
                        (best, best_score)
                    }
                })
                .0
        })
        .collect())
}
