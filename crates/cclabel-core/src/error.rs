//! Error types for cclabel-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! the internal storage layout.

use thiserror::Error;

/// cclabel-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimensions whose cell count does not fit in memory indices
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Backing data does not hold exactly `width * height` cells
    #[error("data length mismatch: expected {expected} cells, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Coordinates outside the grid
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Grid dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for cclabel-core operations
pub type Result<T> = std::result::Result<T, Error>;
