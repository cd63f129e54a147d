// src/loss/naive.rs

use crate::error::SoftmaxError;
use crate::loss::{ensure_finite, LossAndGrad};
use crate::traits::{from_usize, SoftmaxNumeric};
use crate::validate::{check_loss_inputs, Dims};
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Softmax loss function, naive implementation (with loops).
///
/// Inputs have dimension D, there are C classes, and the batch holds N examples.
/// Every score, exponential and gradient contribution is computed one entry at
/// a time; this version is the reference the vectorized one is checked against.
///
/// # Arguments
/// * `w`: Weights of shape (D, C).
/// * `x`: A batch of data of shape (N, D).
/// * `y`: N labels; `y[i] = c` means that `x[i]` has label `c`, with `0 <= c < C`.
/// * `reg`: Regularization strength.
///
/// # Returns
/// The loss as a single scalar and the gradient with respect to `w`, an array of
/// the same shape as `w`.
///
/// # Errors
/// `ShapeMismatch`, `EmptyBatch`, `IndexOutOfRange` or `InvalidRegularization`
/// on invalid input, `NumericOverflow` if the result is not finite.
pub fn softmax_loss_naive<T, S1, S2>(
    w: &ArrayBase<S1, Ix2>,
    x: &ArrayBase<S2, Ix2>,
    y: &[usize],
    reg: T,
) -> Result<LossAndGrad<T>, SoftmaxError>
where
    T: SoftmaxNumeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    const OP: &str = "softmax_loss_naive";
    let (w, x) = (w.view(), x.view());
    let Dims { n, d, c } = check_loss_inputs(&w, &x, y, reg, OP)?;
    debug!("{}: N = {}, D = {}, C = {}, reg = {}", OP, n, d, c, reg);

    let mut loss = T::zero();
    let mut grad = Array2::<T>::zeros((d, c));
    let mut scores = vec![T::zero(); c];

    for i in 0..n {
        for (j, score) in scores.iter_mut().enumerate() {
            let mut f = T::zero();
            for k in 0..d {
                f += x[[i, k]] * w[[k, j]];
            }
            *score = f;
        }

        let max = scores.iter().fold(T::neg_infinity(), |acc, &f| acc.max(f));
        let mut e_sum = T::zero();
        for &f in scores.iter() {
            e_sum += (f - max).exp();
        }
        // -f[y_i] + log(sum_j exp(f_j)), both terms shifted by the row max
        loss += e_sum.ln() - (scores[y[i]] - max);

        for (j, &f) in scores.iter().enumerate() {
            let mut p = (f - max).exp() / e_sum;
            if j == y[i] {
                p -= T::one();
            }
            for k in 0..d {
                grad[[k, j]] += p * x[[i, k]];
            }
        }
    }

    let num_train = from_usize::<T>(n)?;
    let two = T::one() + T::one();
    loss /= num_train;

    let mut w_sq_sum = T::zero();
    for k in 0..d {
        for j in 0..c {
            let wkj = w[[k, j]];
            w_sq_sum += wkj * wkj;
            grad[[k, j]] = grad[[k, j]] / num_train + two * reg * wkj;
        }
    }
    loss += reg * w_sq_sum;

    ensure_finite(loss, &grad, OP)?;
    Ok((loss, grad))
}

#[cfg(test)]
#[path = "naive_test.rs"]
mod tests;
