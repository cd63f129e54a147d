use crate::error::SoftmaxError;
use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the floating point types the loss kernels run on.
///
/// It gathers what both kernels need: `Float` for `exp`/`ln`/`max`,
/// `NumAssignOps` for the accumulating loops, and ndarray's `LinalgScalar`
/// and `ScalarOperand` for `dot` and scalar broadcasting.
/// Only `f32` and `f64` implement it.
pub trait SoftmaxNumeric:
    Float
    + NumAssignOps
    + LinalgScalar
    + ScalarOperand
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl SoftmaxNumeric for f32 {}
impl SoftmaxNumeric for f64 {}

/// Converts a count (batch size, class count) into the element type.
pub(crate) fn from_usize<T: SoftmaxNumeric>(value: usize) -> Result<T, SoftmaxError> {
    T::from(value).ok_or_else(|| {
        SoftmaxError::InternalError(format!("Cannot represent {} in the element type", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: SoftmaxNumeric>(_value: T) {}

    #[test]
    fn test_f32_impl_softmax_numeric() {
        process_numeric(1.0f32);
    }

    #[test]
    fn test_f64_impl_softmax_numeric() {
        process_numeric(1.0f64);
    }

    #[test]
    fn test_from_usize() {
        let n: f64 = from_usize(500).unwrap();
        assert_eq!(n, 500.0);
        let n: f32 = from_usize(3).unwrap();
        assert_eq!(n, 3.0);
    }
}
