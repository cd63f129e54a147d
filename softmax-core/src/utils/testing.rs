use crate::traits::SoftmaxNumeric;
use approx::relative_eq;
use ndarray::{ArrayBase, Data, Ix2};

/// Checks if two matrices are approximately equal (shape and data within tolerance).
/// Panics if shapes differ or any entry differs by more than `tolerance`.
pub fn check_matrix_near<T, S1, S2>(
    actual: &ArrayBase<S1, Ix2>,
    expected: &ArrayBase<S2, Ix2>,
    tolerance: T,
) where
    T: SoftmaxNumeric + approx::RelativeEq<Epsilon = T>,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    assert_eq!(actual.shape(), expected.shape(), "Shape mismatch");

    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        if !relative_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                idx,
                a,
                e,
                (*a - *e).abs(),
                tolerance
            );
        }
    }
}

/// Maximum relative error between two matrices of the same shape:
/// `max |a - b| / max(1e-8, |a| + |b|)`. A `NaN` entry makes the result `NaN`.
pub fn rel_error<T, S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> f64
where
    T: SoftmaxNumeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    assert_eq!(a.shape(), b.shape(), "Shape mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x = x.to_f64().unwrap_or(f64::NAN);
            let y = y.to_f64().unwrap_or(f64::NAN);
            (x - y).abs() / (x.abs() + y.abs()).max(1e-8)
        })
        .fold(0.0, |acc, e| if e.is_nan() || e > acc { e } else { acc })
}
