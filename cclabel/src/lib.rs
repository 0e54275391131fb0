//! cclabel - Connected component labeling for binary images
//!
//! Labels the 4-connected foreground regions of a binary mask and filters
//! them by area.
//!
//! # Overview
//!
//! - Flood-fill labeling with contiguous, discovery-ordered labels
//! - Two-pass labeling with union-find equivalence resolution
//! - Area filtering by per-label pixel count
//! - PNG input with fixed or Otsu thresholding, and label rendering
//!
//! # Example
//!
//! ```
//! use cclabel::{Grid, Mask, region};
//!
//! let mask = Mask::from_rows(&[[true, true, false, true]]).unwrap();
//! let labels = region::label_components(&mask);
//! assert_eq!(labels.as_slice(), &[1, 1, 0, 2]);
//!
//! let kept = region::filter_by_area(&labels, 2).unwrap();
//! assert_eq!(kept, Grid::from_rows(&[[true, true, false, false]]).unwrap());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cclabel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use cclabel_io as io;
pub use cclabel_region as region;
