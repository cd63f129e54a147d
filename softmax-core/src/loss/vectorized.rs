// src/loss/vectorized.rs

use crate::error::SoftmaxError;
use crate::loss::{ensure_finite, LossAndGrad};
use crate::ops::softmax::shift_by_row_max;
use crate::traits::{from_usize, SoftmaxNumeric};
use crate::validate::{check_loss_inputs, Dims};
use log::debug;
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix2, Zip};

/// Softmax loss function, vectorized version.
///
/// Inputs, outputs and errors are the same as
/// [`softmax_loss_naive`](crate::loss::naive::softmax_loss_naive). The scores come from
/// a single product `X · W`, the loss from row-wise reductions over the shifted
/// scores, and the gradient from a single product `Xᵀ · (P - Y)` where `P` holds
/// the softmax probabilities and `Y` the one-hot labels.
pub fn softmax_loss_vectorized<T, S1, S2>(
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
    const OP: &str = "softmax_loss_vectorized";
    let (w, x) = (w.view(), x.view());
    let Dims { n, d, c } = check_loss_inputs(&w, &x, y, reg, OP)?;
    debug!("{}: N = {}, D = {}, C = {}, reg = {}", OP, n, d, c, reg);

    let labels = ArrayView1::from(y);
    let num_train = from_usize::<T>(n)?;
    let two = T::one() + T::one();

    let shifted = shift_by_row_max(&x.dot(&w));
    let exp = shifted.mapv(T::exp);
    let e_sum = exp.sum_axis(Axis(1));

    let correct = Zip::from(shifted.rows())
        .and(&labels)
        .map_collect(|row, &label| row[label]);
    let data_loss = (e_sum.mapv(T::ln) - &correct).sum() / num_train;
    let loss = data_loss + reg * w.mapv(|v| v * v).sum();

    let mut counts = exp / &e_sum.insert_axis(Axis(1));
    Zip::from(counts.rows_mut())
        .and(&labels)
        .for_each(|mut row, &label| row[label] -= T::one());

    let grad = x.t().dot(&counts) / num_train + &(&w * (two * reg));

    ensure_finite(loss, &grad, OP)?;
    Ok((loss, grad))
}

#[cfg(test)]
#[path = "vectorized_test.rs"]
mod tests;
