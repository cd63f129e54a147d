//! # Score Operations Module (`ops`)
//!
//! Row-wise operations on a (N, C) matrix of class scores, shared by the
//! vectorized loss kernel and the classifier helpers.
//!
//! - [`softmax`]: row maximum, max-shifted scores, log-sum-exp and softmax.

pub mod softmax;

pub use softmax::{log_sum_exp_rows, row_max, shift_by_row_max, softmax_rows};
