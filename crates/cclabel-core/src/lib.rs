//! cclabel core - raster data structures for connected component labeling
//!
//! This crate provides the data model shared by the labeling crates:
//!
//! - [`Grid`] - dense row-major raster with `(x, y)` access
//! - [`Mask`] - binary input grid (`Grid<bool>`)
//! - [`LabelGrid`] - labeling output (`Grid<u32>`, `0` = background)
//! - [`Error`] / [`Result`] - construction and access errors

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{Grid, LabelGrid, Mask};
