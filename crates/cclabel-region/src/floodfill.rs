//! Flood-fill labeling
//!
//! Labels 4-connected components by scanning the mask in row-major order
//! and flooding each newly found component from its first cell. The
//! frontier is an explicit heap-allocated stack, so a single component
//! covering the whole image costs memory proportional to its pixel count
//! and never deepens the call stack.
//!
//! Labels are assigned in discovery order: the component containing the
//! first foreground cell in raster order gets label 1, the next newly
//! discovered component gets 2, and so on with no gaps.

use crate::error::{RegionError, RegionResult};
use cclabel_core::{LabelGrid, Mask};
use tracing::{debug, trace};

/// Label every 4-connected foreground component of `mask`.
///
/// Returns a grid of the same dimensions where background cells are 0 and
/// each component carries a distinct label in `1..=n`, numbered in the
/// order components are first met in a row-major scan.
///
/// # Examples
///
/// ```
/// use cclabel_core::Mask;
/// use cclabel_region::label_components;
///
/// let mask = Mask::from_bytes(6, 1, &[1, 1, 0, 1, 1, 1]).unwrap();
/// let labels = label_components(&mask);
/// assert_eq!(labels.as_slice(), &[1, 1, 0, 2, 2, 2]);
/// ```
pub fn label_components(mask: &Mask) -> LabelGrid {
    let mut labels = LabelGrid::new_like(mask);
    let mut stack = Vec::new();
    let mut current_label = 1u32;

    for start in 0..mask.len() {
        if !mask.as_slice()[start] || labels.as_slice()[start] != 0 {
            continue;
        }

        let filled = flood(mask, &mut labels, start, current_label, &mut stack);
        trace!(label = current_label, pixels = filled, "component filled");
        current_label += 1;
    }

    debug!(
        width = mask.width(),
        height = mask.height(),
        components = current_label - 1,
        "flood-fill labeling complete"
    );
    labels
}

/// Flood a single component from a seed point.
///
/// Assigns `label` to every foreground cell 4-connected to
/// `(seed_x, seed_y)` that is still unlabeled in `labels`, and returns the
/// number of cells written. A background seed, or one that is already
/// labeled, fills nothing.
///
/// # Errors
///
/// - [`RegionError::DimensionMismatch`] if `labels` and `mask` differ in size
/// - [`RegionError::InvalidArgument`] if `label` is 0 (reserved for background)
/// - [`RegionError::InvalidSeed`] if the seed lies outside the mask
pub fn fill_component(
    mask: &Mask,
    labels: &mut LabelGrid,
    seed_x: u32,
    seed_y: u32,
    label: u32,
) -> RegionResult<u32> {
    if !labels.same_dimensions(mask) {
        return Err(RegionError::DimensionMismatch {
            expected: mask.dimensions(),
            actual: labels.dimensions(),
        });
    }
    if label == 0 {
        return Err(RegionError::InvalidArgument(
            "label 0 is reserved for background".to_string(),
        ));
    }
    let start = mask.index_of(seed_x, seed_y).ok_or(RegionError::InvalidSeed {
        x: seed_x,
        y: seed_y,
    })?;

    if !mask.as_slice()[start] || labels.as_slice()[start] != 0 {
        return Ok(0);
    }

    let mut stack = Vec::new();
    Ok(flood(mask, labels, start, label, &mut stack))
}

/// Depth-first fill from `start`, which must be unlabeled foreground.
///
/// Cells are labeled when pushed, so each one enters the stack at most once.
fn flood(
    mask: &Mask,
    labels: &mut LabelGrid,
    start: usize,
    label: u32,
    stack: &mut Vec<usize>,
) -> u32 {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let cells = mask.as_slice();
    let out = labels.as_mut_slice();

    let mut filled = 0u32;
    stack.clear();
    out[start] = label;
    stack.push(start);

    while let Some(i) = stack.pop() {
        filled += 1;
        let x = i % width;
        let y = i / width;

        let mut visit = |n: usize| {
            if cells[n] && out[n] == 0 {
                out[n] = label;
                stack.push(n);
            }
        };

        if y > 0 {
            visit(i - width);
        }
        if y + 1 < height {
            visit(i + width);
        }
        if x > 0 {
            visit(i - 1);
        }
        if x + 1 < width {
            visit(i + 1);
        }
    }

    filled
}
