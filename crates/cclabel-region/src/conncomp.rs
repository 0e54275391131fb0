//! Connected component labeling entry points
//!
//! Both labeling strategies implement the same contract and always induce
//! the same partition of the foreground. This module lets callers pick one
//! at runtime, bundles the labeling options, and provides the helpers that
//! operate on any label grid regardless of which strategy produced it.

use crate::area::retain_by_area;
use crate::error::RegionResult;
use crate::floodfill::label_components;
use crate::twopass::label_components_two_pass;
use cclabel_core::{LabelGrid, Mask};
use std::collections::{HashMap, HashSet};

/// Labeling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAlgorithm {
    /// Stack-based flood fill; labels are contiguous in discovery order
    #[default]
    FloodFill,
    /// Two raster passes with union-find; labels are roots and may have gaps
    TwoPass,
}

impl LabelAlgorithm {
    /// `true` if the strategy guarantees labels `1..=n` without gaps.
    pub fn contiguous_labels(self) -> bool {
        matches!(self, LabelAlgorithm::FloodFill)
    }
}

/// Options for [`label_with_options`]
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Labeling strategy
    pub algorithm: LabelAlgorithm,
    /// Drop components with fewer pixels than this
    pub min_size: Option<u32>,
}

impl LabelOptions {
    /// Create new options with the specified strategy
    pub fn new(algorithm: LabelAlgorithm) -> Self {
        Self {
            algorithm,
            min_size: None,
        }
    }

    /// Set the minimum component size
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = Some(min_size);
        self
    }
}

/// Label `mask` with the chosen strategy.
pub fn label_with(mask: &Mask, algorithm: LabelAlgorithm) -> LabelGrid {
    match algorithm {
        LabelAlgorithm::FloodFill => label_components(mask),
        LabelAlgorithm::TwoPass => label_components_two_pass(mask),
    }
}

/// Label `mask` and, if requested, drop undersized components.
///
/// Surviving components keep their labels; removed ones become background.
///
/// # Errors
///
/// Returns [`RegionError::InvalidArgument`](crate::RegionError::InvalidArgument)
/// if `options.min_size` is `Some(0)`.
pub fn label_with_options(mask: &Mask, options: &LabelOptions) -> RegionResult<LabelGrid> {
    let labels = label_with(mask, options.algorithm);
    match options.min_size {
        Some(min_size) => retain_by_area(&labels, min_size),
        None => Ok(labels),
    }
}

/// Relabel to contiguous values `1..=n` in row-major first-appearance order.
///
/// Returns the renumbered grid and `n`. Applied to the output of
/// [`label_components_two_pass`] this reproduces [`label_components`]
/// exactly.
pub fn renumber_labels(labels: &LabelGrid) -> (LabelGrid, u32) {
    let mut mapping: HashMap<u32, u32> = HashMap::new();
    let mut next = 0u32;

    let renumbered = labels.map(|&label| {
        if label == 0 {
            return 0;
        }
        *mapping.entry(label).or_insert_with(|| {
            next += 1;
            next
        })
    });

    (renumbered, next)
}

/// Count distinct non-zero labels.
pub fn count_components(labels: &LabelGrid) -> u32 {
    labels
        .iter()
        .filter(|&&label| label != 0)
        .collect::<HashSet<_>>()
        .len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use cclabel_core::Grid;

    #[test]
    fn test_label_with_dispatch() {
        let mask = Mask::from_bytes(3, 2, &[1, 0, 1, 1, 1, 1]).unwrap();
        let flood = label_with(&mask, LabelAlgorithm::FloodFill);
        let two_pass = label_with(&mask, LabelAlgorithm::TwoPass);
        assert_eq!(flood, two_pass);
        assert!(LabelAlgorithm::default().contiguous_labels());
        assert!(!LabelAlgorithm::TwoPass.contiguous_labels());
    }

    #[test]
    fn test_renumber_closes_gaps() {
        let labels = Grid::from_rows(&[[0u32, 7, 7], [3, 0, 12]]).unwrap();
        let (renumbered, n) = renumber_labels(&labels);
        assert_eq!(n, 3);
        assert_eq!(renumbered.as_slice(), &[0, 1, 1, 2, 0, 3]);
    }

    #[test]
    fn test_renumber_empty() {
        let labels: LabelGrid = Grid::new(2, 2).unwrap();
        let (renumbered, n) = renumber_labels(&labels);
        assert_eq!(n, 0);
        assert_eq!(renumbered, labels);
    }

    #[test]
    fn test_count_components() {
        let labels = Grid::from_rows(&[[0u32, 4, 4], [9, 0, 1]]).unwrap();
        assert_eq!(count_components(&labels), 3);
    }

    #[test]
    fn test_label_with_options_filters() {
        let mask = Mask::from_bytes(6, 1, &[1, 1, 0, 1, 1, 1]).unwrap();
        let options = LabelOptions::new(LabelAlgorithm::TwoPass).with_min_size(3);
        let labels = label_with_options(&mask, &options).unwrap();
        assert_eq!(labels.as_slice(), &[0, 0, 0, 2, 2, 2]);

        let zero = LabelOptions::default().with_min_size(0);
        assert!(label_with_options(&mask, &zero).is_err());
    }
}
