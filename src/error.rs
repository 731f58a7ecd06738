//! Error types shared by the fitter, the sampler and the stepper.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, HeatError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeatError {
    /// Empty or malformed sample set.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The interpolation system has no unique solution.
    #[error("singular {size}x{size} interpolation system (duplicate or inseparable samples)")]
    SingularMatrix { size: usize },

    /// Grid geometry or contents that the operation cannot work with.
    #[error("invalid {rows}x{cols} grid: {reason}")]
    InvalidGrid {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// Out-of-range physical or numerical parameter.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl HeatError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        HeatError::InvalidInput {
            reason: reason.into(),
        }
    }
}
