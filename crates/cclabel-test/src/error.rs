//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture drawing contains a character that is neither foreground
    /// nor background
    #[error("invalid fixture character {ch:?} at row {row}, column {col}")]
    InvalidFixture { row: usize, col: usize, ch: char },

    /// Core library error (ragged rows, oversized grid)
    #[error("core error: {0}")]
    Core(#[from] cclabel_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
