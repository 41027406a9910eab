// src/numerics/types/error.rs
// Error type shared by the fixed-size point and vector types.

/// Errors that can occur when building or operating on fixed-size numeric types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Size mismatch: expected {expected} components, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Cross product is only defined for dimension 3, got dimension {dimension}")]
    Dimensionality { dimension: usize },

    #[error("Index {index} is out of bounds for dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },

    #[error("Missing component {index}: expected {expected} tokens")]
    MissingComponent { index: usize, expected: usize },

    #[error("Invalid component {index} ({token:?}): {reason}")]
    InvalidComponent {
        index: usize,
        token: String,
        reason: String,
    },

    #[error("Unexpected trailing input {token:?} after {expected} components")]
    TrailingInput { token: String, expected: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Division overflowed at component {index}")]
    DivisionOverflow { index: usize },

    #[error("Codec error: {0}")]
    Codec(String),
}
