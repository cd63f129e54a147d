// src/loss/objective.rs

use crate::error::SoftmaxError;
use crate::loss::{softmax_loss_naive, softmax_loss_vectorized, LossAndGrad};
use crate::traits::SoftmaxNumeric;
use crate::validate::check_reg;
use log::debug;
use ndarray::{ArrayBase, Data, Ix2};
use std::fmt;
use std::str::FromStr;

/// Selects which kernel computes the loss:
/// 'naive' | 'vectorized'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Implementation {
    Naive,
    #[default]
    Vectorized,
}

impl FromStr for Implementation {
    type Err = SoftmaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" | "loop" | "loops" => Ok(Implementation::Naive),
            "vectorized" | "vectorised" | "fast" => Ok(Implementation::Vectorized),
            _ => Err(SoftmaxError::UnsupportedOperation(format!(
                "Unsupported softmax loss implementation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::Naive => write!(f, "naive"),
            Implementation::Vectorized => write!(f, "vectorized"),
        }
    }
}

/// The softmax objective of a linear classifier, configured once and evaluated
/// for every new set of weights.
///
/// # Fields
/// * `implementation`: Which kernel computes the loss.
/// * `reg`: L2 regularization strength, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxLoss<T> {
    implementation: Implementation,
    reg: T,
}

impl<T: SoftmaxNumeric> SoftmaxLoss<T> {
    /// Creates a new `SoftmaxLoss`.
    ///
    /// # Errors
    /// `InvalidRegularization` if `reg` is negative or not finite.
    pub fn new(implementation: Implementation, reg: T) -> Result<Self, SoftmaxError> {
        check_reg(reg)?;
        Ok(SoftmaxLoss { implementation, reg })
    }

    /// Creates a new `SoftmaxLoss` from an implementation name
    /// (`"naive"` or `"vectorized"`).
    pub fn from_name(name: &str, reg: T) -> Result<Self, SoftmaxError> {
        SoftmaxLoss::new(name.parse()?, reg)
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    pub fn reg(&self) -> T {
        self.reg
    }

    /// Computes the loss and its gradient for weights `w` on batch `x` with labels `y`.
    pub fn calculate<S1, S2>(
        &self,
        w: &ArrayBase<S1, Ix2>,
        x: &ArrayBase<S2, Ix2>,
        y: &[usize],
    ) -> Result<LossAndGrad<T>, SoftmaxError>
    where
        S1: Data<Elem = T>,
        S2: Data<Elem = T>,
    {
        debug!("SoftmaxLoss: calculate() with {} kernel", self.implementation);
        match self.implementation {
            Implementation::Naive => softmax_loss_naive(w, x, y, self.reg),
            Implementation::Vectorized => softmax_loss_vectorized(w, x, y, self.reg),
        }
    }

    /// Computes only the loss, for callers that do not need the gradient
    /// (numerical gradient checks, validation loss).
    pub fn loss<S1, S2>(
        &self,
        w: &ArrayBase<S1, Ix2>,
        x: &ArrayBase<S2, Ix2>,
        y: &[usize],
    ) -> Result<T, SoftmaxError>
    where
        S1: Data<Elem = T>,
        S2: Data<Elem = T>,
    {
        self.calculate(w, x, y).map(|(loss, _)| loss)
    }
}

#[cfg(test)]
#[path = "objective_test.rs"]
mod tests;
