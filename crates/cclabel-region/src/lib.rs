//! cclabel-region - 4-connected component labeling
//!
//! This crate labels the foreground of a binary [`Mask`] and filters the
//! resulting components by size:
//!
//! - **Flood-fill labeling** - [`label_components`], explicit-stack
//!   traversal, contiguous labels in discovery order
//! - **Two-pass labeling** - [`label_components_two_pass`], raster scan with
//!   union-find equivalence resolution, root labels (may have gaps)
//! - **Area filtering** - [`filter_by_area`] and [`retain_by_area`], backed
//!   by the per-label pixel counts of [`component_sizes`]
//!
//! Every call allocates its own output and scratch state, so independent
//! masks can be labeled concurrently from different threads.
//!
//! # Examples
//!
//! ```
//! use cclabel_core::Mask;
//! use cclabel_region::{
//!     filter_by_area, label_components, label_components_two_pass, renumber_labels,
//! };
//!
//! // Two components: an L of three pixels and a single pixel.
//! let mask = Mask::from_bytes(3, 3, &[
//!     1, 0, 0,
//!     1, 1, 0,
//!     0, 0, 1,
//! ]).unwrap();
//!
//! let labels = label_components(&mask);
//! assert_eq!(labels.max_label(), 2);
//!
//! // Both strategies agree once the two-pass roots are renumbered.
//! let (renumbered, n) = renumber_labels(&label_components_two_pass(&mask));
//! assert_eq!(n, 2);
//! assert_eq!(renumbered, labels);
//!
//! // Only the L survives a minimum size of 2.
//! let filtered = filter_by_area(&labels, 2).unwrap();
//! assert_eq!(filtered.count_foreground(), 3);
//! ```

pub mod area;
pub mod conncomp;
pub mod error;
pub mod floodfill;
pub mod twopass;
mod union_find;

// Re-export core types
pub use cclabel_core;
pub use cclabel_core::{Grid, LabelGrid, Mask};

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use area::{
    LabelCounts, component_sizes, filter_by_area, filter_by_area_checked, retain_by_area,
};
pub use conncomp::{
    LabelAlgorithm, LabelOptions, count_components, label_with, label_with_options,
    renumber_labels,
};
pub use floodfill::{fill_component, label_components};
pub use twopass::label_components_two_pass;
