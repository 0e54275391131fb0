//! Component area measurement and filtering
//!
//! Works on any label grid, whichever strategy produced it: labels are
//! only compared for equality, never assumed contiguous.

use crate::error::{RegionError, RegionResult};
use cclabel_core::{LabelGrid, Mask};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Pixel count of every label in a label grid.
///
/// Background (label 0) is never counted. Iteration is in ascending label
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts {
    counts: BTreeMap<u32, usize>,
}

impl LabelCounts {
    /// Pixel count of `label`, or `None` if it does not occur.
    pub fn get(&self, label: u32) -> Option<usize> {
        self.counts.get(&label).copied()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` if the grid had no foreground.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of foreground pixels.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(label, count)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&label, &count)| (label, count))
    }

    /// `true` if `label` is foreground and its component has at least
    /// `min_size` pixels.
    fn keeps(&self, label: u32, min_size: u32) -> bool {
        label != 0 && self.get(label).is_some_and(|count| count >= min_size as usize)
    }
}

/// Count the pixels of each label in one scan.
pub fn component_sizes(labels: &LabelGrid) -> LabelCounts {
    let mut counts = BTreeMap::new();
    for &label in labels.iter().filter(|&&label| label != 0) {
        *counts.entry(label).or_insert(0usize) += 1;
    }
    LabelCounts { counts }
}

fn check_min_size(min_size: u32) -> RegionResult<()> {
    if min_size == 0 {
        return Err(RegionError::InvalidArgument(
            "min_size must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Measure, log, and return the count table for a filtering pass.
fn measure(labels: &LabelGrid) -> LabelCounts {
    let counts = component_sizes(labels);
    debug!(components = counts.len(), "measured component sizes");
    for (label, count) in counts.iter() {
        debug!(label, pixels = count, "component size");
    }
    counts
}

fn report_result(counts: &LabelCounts, kept: usize, min_size: u32) {
    if kept == 0 && !counts.is_empty() {
        warn!(
            min_size,
            components = counts.len(),
            "no component reaches the minimum size, output is empty"
        );
    } else {
        debug!(min_size, kept_pixels = kept, "area filter applied");
    }
}

/// Keep only foreground pixels whose component has at least `min_size` pixels.
///
/// Returns a mask with the same dimensions as `labels`. If every component
/// is too small the mask is all background, which is a valid result.
///
/// # Errors
///
/// Returns [`RegionError::InvalidArgument`] if `min_size` is 0.
///
/// # Examples
///
/// ```
/// use cclabel_core::Mask;
/// use cclabel_region::{filter_by_area, label_components};
///
/// let mask = Mask::from_bytes(6, 1, &[1, 1, 0, 1, 1, 1]).unwrap();
/// let labels = label_components(&mask);
/// let filtered = filter_by_area(&labels, 3).unwrap();
/// assert_eq!(filtered.as_slice(), &[false, false, false, true, true, true]);
/// ```
pub fn filter_by_area(labels: &LabelGrid, min_size: u32) -> RegionResult<Mask> {
    check_min_size(min_size)?;
    let counts = measure(labels);

    let filtered = labels.map(|&label| counts.keeps(label, min_size));
    report_result(&counts, filtered.count_foreground(), min_size);
    Ok(filtered)
}

/// [`filter_by_area`] with a dimension check against what the caller expects.
///
/// # Errors
///
/// - [`RegionError::Core`] wrapping `DimensionMismatch` if `labels` is not
///   `expected` in size
/// - [`RegionError::InvalidArgument`] if `min_size` is 0
pub fn filter_by_area_checked(
    labels: &LabelGrid,
    min_size: u32,
    expected: (u32, u32),
) -> RegionResult<Mask> {
    labels.ensure_dimensions(expected)?;
    filter_by_area(labels, min_size)
}

/// Like [`filter_by_area`], but copies surviving labels through instead of
/// producing a mask. Removed components become 0.
///
/// # Errors
///
/// Returns [`RegionError::InvalidArgument`] if `min_size` is 0.
pub fn retain_by_area(labels: &LabelGrid, min_size: u32) -> RegionResult<LabelGrid> {
    check_min_size(min_size)?;
    let counts = measure(labels);

    let retained = labels.map(|&label| {
        if counts.keeps(label, min_size) {
            label
        } else {
            0
        }
    });
    let kept = retained.iter().filter(|&&label| label != 0).count();
    report_result(&counts, kept, min_size);
    Ok(retained)
}
