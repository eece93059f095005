use thiserror::Error;

/// Errors surfaced by fitting, prediction, and the vector-arithmetic core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("model not fitted. Call fit() first.")]
    NotFitted,

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
