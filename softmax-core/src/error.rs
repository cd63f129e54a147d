use thiserror::Error;

/// Custom error type for the softmax-core crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SoftmaxError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Label out of range in {operation}: example {example} has label {label}, but there are only {num_classes} classes")]
    IndexOutOfRange {
        example: usize,
        label: usize,
        num_classes: usize,
        operation: String,
    },

    #[error("Cannot compute {operation} on an empty batch (N = 0)")]
    EmptyBatch { operation: String },

    #[error("Invalid regularization strength {reg}: must be finite and non-negative")]
    InvalidRegularization { reg: f64 },

    #[error("Non-finite result in {operation}: inputs overflow even after max-subtraction")]
    NumericOverflow { operation: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
