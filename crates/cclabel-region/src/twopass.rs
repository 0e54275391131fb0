//! Two-pass union-find labeling
//!
//! The first pass walks the mask in row-major order and gives each
//! foreground cell a provisional label taken from its already-visited
//! neighbors (left and above), recording an equivalence whenever the two
//! disagree. The equivalence forest is then flattened so that the second
//! pass can replace every provisional label with its root in one lookup.
//!
//! # Label values
//!
//! Output labels are union-find roots. Provisional labels are allocated in
//! raster order and a merge always keeps the smaller root, so each root is
//! the provisional label of its component's first cell in raster order.
//! Roots therefore increase in discovery order, but they are **not**
//! contiguous: labels absorbed by a merge leave gaps. Use
//! [`renumber_labels`](crate::renumber_labels) when consecutive labels are
//! needed.

use crate::union_find::UnionFind;
use cclabel_core::{LabelGrid, Mask};
use tracing::debug;

/// Label every 4-connected foreground component of `mask` in two raster passes.
///
/// Produces the same partition as [`label_components`](crate::label_components);
/// label values may differ because they are not renumbered (see the module
/// documentation).
///
/// # Examples
///
/// ```
/// use cclabel_core::Mask;
/// use cclabel_region::label_components_two_pass;
///
/// // A "U": both arms get their own provisional label until the bottom row
/// // joins them.
/// let mask = Mask::from_bytes(3, 2, &[1, 0, 1, 1, 1, 1]).unwrap();
/// let labels = label_components_two_pass(&mask);
/// assert_eq!(labels.as_slice(), &[1, 0, 1, 1, 1, 1]);
/// ```
pub fn label_components_two_pass(mask: &Mask) -> LabelGrid {
    let width = mask.width() as usize;
    let cells = mask.as_slice();
    let mut labels = LabelGrid::new_like(mask);
    let mut equivalences = UnionFind::new();

    // Pass 1: provisional labels from the left and above neighbors.
    let out = labels.as_mut_slice();
    for (i, &foreground) in cells.iter().enumerate() {
        if !foreground {
            continue;
        }
        let left = if i % width > 0 { out[i - 1] } else { 0 };
        let above = if i >= width { out[i - width] } else { 0 };

        out[i] = match (left, above) {
            (0, 0) => equivalences.make_set(),
            (neighbor, 0) | (0, neighbor) => equivalences.find(neighbor),
            (left, above) => equivalences.union(left, above),
        };
    }

    if equivalences.is_empty() {
        debug!(
            width = mask.width(),
            height = mask.height(),
            "two-pass labeling: no foreground"
        );
        return labels;
    }

    equivalences.flatten();

    // Pass 2: replace provisional labels by their roots.
    for label in labels.as_mut_slice().iter_mut().filter(|l| **l != 0) {
        *label = equivalences.resolved(*label);
    }

    debug!(
        width = mask.width(),
        height = mask.height(),
        provisional = equivalences.len(),
        components = equivalences.root_count(),
        "two-pass labeling complete"
    );
    labels
}
