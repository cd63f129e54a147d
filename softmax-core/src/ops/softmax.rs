// src/ops/softmax.rs

use crate::traits::SoftmaxNumeric;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};

/// Maximum score of every row. Rows with no columns yield `-inf`.
pub fn row_max<T, S>(scores: &ArrayBase<S, Ix2>) -> Array1<T>
where
    T: SoftmaxNumeric,
    S: Data<Elem = T>,
{
    scores.map_axis(Axis(1), |row| {
        row.fold(T::neg_infinity(), |acc, &s| acc.max(s))
    })
}

/// Subtracts each row's maximum from every entry of that row.
///
/// Softmax and the cross-entropy loss are invariant to this shift, and after it
/// every exponent is `<= 0`, so `exp` cannot overflow.
pub fn shift_by_row_max<T, S>(scores: &ArrayBase<S, Ix2>) -> Array2<T>
where
    T: SoftmaxNumeric,
    S: Data<Elem = T>,
{
    let max = row_max(scores).insert_axis(Axis(1));
    scores - &max
}

/// Row-wise `log(sum_j exp(scores[i, j]))`, computed on shifted scores.
pub fn log_sum_exp_rows<T, S>(scores: &ArrayBase<S, Ix2>) -> Array1<T>
where
    T: SoftmaxNumeric,
    S: Data<Elem = T>,
{
    let max = row_max(scores);
    let shifted = shift_by_row_max(scores);
    shifted.mapv(T::exp).sum_axis(Axis(1)).mapv(T::ln) + &max
}

/// Row-wise softmax: every row of the result is a probability distribution.
///
/// # Arguments
/// * `scores`: Class scores of shape (N, C).
///
/// # Returns
/// Probabilities of shape (N, C).
pub fn softmax_rows<T, S>(scores: &ArrayBase<S, Ix2>) -> Array2<T>
where
    T: SoftmaxNumeric,
    S: Data<Elem = T>,
{
    let exp = shift_by_row_max(scores).mapv(T::exp);
    let sums = exp.sum_axis(Axis(1)).insert_axis(Axis(1));
    exp / &sums
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
