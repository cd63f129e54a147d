// src/validate.rs

use crate::error::SoftmaxError;
use crate::traits::SoftmaxNumeric;
use ndarray::ArrayView2;

/// Problem dimensions of one loss call: N examples, D features, C classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dims {
    pub n: usize,
    pub d: usize,
    pub c: usize,
}

/// Checks that `X` (N, D) can be multiplied with `W` (D, C).
pub(crate) fn check_score_shapes<T>(
    w: &ArrayView2<'_, T>,
    x: &ArrayView2<'_, T>,
    operation: &str,
) -> Result<Dims, SoftmaxError> {
    if x.ncols() != w.nrows() {
        return Err(SoftmaxError::ShapeMismatch {
            expected: vec![x.nrows(), w.nrows()],
            actual: x.shape().to_vec(),
            operation: operation.to_string(),
        });
    }
    Ok(Dims {
        n: x.nrows(),
        d: w.nrows(),
        c: w.ncols(),
    })
}

/// Checks a regularization strength: finite and non-negative.
pub(crate) fn check_reg<T: SoftmaxNumeric>(reg: T) -> Result<(), SoftmaxError> {
    if !reg.is_finite() || reg < T::zero() {
        return Err(SoftmaxError::InvalidRegularization {
            reg: reg.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Validates the full input of a loss call.
///
/// Order of checks: `X`/`W` shapes, label count, empty batch, label range,
/// regularization strength. The first failure is returned.
pub(crate) fn check_loss_inputs<T: SoftmaxNumeric>(
    w: &ArrayView2<'_, T>,
    x: &ArrayView2<'_, T>,
    y: &[usize],
    reg: T,
    operation: &str,
) -> Result<Dims, SoftmaxError> {
    let dims = check_score_shapes(w, x, operation)?;
    if y.len() != dims.n {
        return Err(SoftmaxError::ShapeMismatch {
            expected: vec![dims.n],
            actual: vec![y.len()],
            operation: operation.to_string(),
        });
    }
    if dims.n == 0 {
        return Err(SoftmaxError::EmptyBatch {
            operation: operation.to_string(),
        });
    }
    if let Some((example, &label)) = y.iter().enumerate().find(|&(_, &l)| l >= dims.c) {
        return Err(SoftmaxError::IndexOutOfRange {
            example,
            label,
            num_classes: dims.c,
            operation: operation.to_string(),
        });
    }
    check_reg(reg)?;
    Ok(dims)
}
