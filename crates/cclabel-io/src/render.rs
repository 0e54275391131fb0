//! Label visualization
//!
//! Label grids are not directly viewable: labels are arbitrary positive
//! integers. These functions scale them into displayable intensities.

use cclabel_core::{Grid, LabelGrid, Mask};

/// Scale labels into 8-bit gray levels
///
/// Label `l` becomes `l * 255 / max_label` (integer division), so the
/// highest label is white and background stays black. An all-background
/// grid renders black.
pub fn render_labels(labels: &LabelGrid) -> Grid<u8> {
    let max = labels.max_label() as u64;
    if max == 0 {
        return Grid::new_like(labels);
    }
    labels.map(|&label| (label as u64 * 255 / max) as u8)
}

/// Scale labels into `[0, 1]` by dividing by the maximum label.
pub fn normalize_labels(labels: &LabelGrid) -> Grid<f32> {
    let max = labels.max_label();
    if max == 0 {
        return Grid::new_like(labels);
    }
    let max = max as f64;
    labels.map(|&label| (label as f64 / max) as f32)
}

/// Render a mask as black (background) and white (foreground).
pub fn render_mask(mask: &Mask) -> Grid<u8> {
    mask.map(|&fg| if fg { 255 } else { 0 })
}
