//! Error types for cclabel-region

use thiserror::Error;

/// Errors that can occur during labeling and filtering operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cclabel_core::Error),

    /// Argument outside its valid range (e.g. a zero area threshold)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Grid dimensions differ from what the caller expects
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
