//! Binary thresholding
//!
//! Turns grayscale rasters into the canonical [`Mask`] consumed by the
//! labelers. Any pixel-format branching happens here, so labeling code
//! never needs to know whether the source was 8-bit or floating point.
//!
//! - Fixed threshold binarization (`value > threshold`)
//! - Otsu's method (automatic threshold selection)
//! - Cutoff binarization of normalized `[0, 1]` float rasters

use cclabel_core::{Grid, Mask};
use tracing::debug;

/// Default cutoff for 8-bit input: values above mid-gray are foreground.
pub const DEFAULT_BYTE_THRESHOLD: u8 = 127;

/// Default cutoff for normalized float input.
pub const DEFAULT_FLOAT_THRESHOLD: f32 = 0.5;

/// How to derive a mask from an 8-bit image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMethod {
    /// Foreground iff value > the given level
    Fixed(u8),
    /// Level chosen by Otsu's method, then as `Fixed`
    Otsu,
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        ThresholdMethod::Fixed(DEFAULT_BYTE_THRESHOLD)
    }
}

/// Convert a grayscale image to a mask using a fixed threshold
///
/// Pixels strictly greater than `threshold` become foreground.
pub fn threshold_to_mask(gray: &Grid<u8>, threshold: u8) -> Mask {
    gray.map(|&value| value > threshold)
}

/// Convert a grayscale image to a mask with the given method.
pub fn mask_from_gray(gray: &Grid<u8>, method: ThresholdMethod) -> Mask {
    let threshold = match method {
        ThresholdMethod::Fixed(level) => level,
        ThresholdMethod::Otsu => compute_otsu_threshold(gray),
    };
    let mask = threshold_to_mask(gray, threshold);
    debug!(
        threshold,
        foreground = mask.count_foreground(),
        "thresholded grayscale image"
    );
    mask
}

/// Convert a normalized float image to a mask
///
/// Pixels strictly greater than `cutoff` become foreground. NaN is
/// background.
pub fn mask_from_float(image: &Grid<f32>, cutoff: f32) -> Mask {
    image.map(|&value| value > cutoff)
}

/// Compute Otsu's threshold for a grayscale image
///
/// Returns the level `t` that maximizes the between-class variance
/// `w0 * w1 * (mean0 - mean1)^2` of the split `[0, t]` / `(t, 255]`. Ties
/// keep the lowest level; an empty or single-valued image yields 0.
pub fn compute_otsu_threshold(gray: &Grid<u8>) -> u8 {
    let mut histogram = [0u64; 256];
    for &value in gray.iter() {
        histogram[value as usize] += 1;
    }

    let total = gray.len() as f64;
    if total == 0.0 {
        return 0;
    }

    let weighted_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut best_threshold = 0u8;
    let mut best_variance = 0.0f64;
    let mut count0 = 0.0f64;
    let mut sum0 = 0.0f64;

    for (level, &count) in histogram.iter().enumerate() {
        count0 += count as f64;
        sum0 += level as f64 * count as f64;

        let count1 = total - count0;
        if count0 == 0.0 || count1 == 0.0 {
            continue;
        }

        let w0 = count0 / total;
        let w1 = count1 / total;
        let mean0 = sum0 / count0;
        let mean1 = (weighted_sum - sum0) / count1;
        let variance = w0 * w1 * (mean0 - mean1) * (mean0 - mean1);

        if variance > best_variance {
            best_variance = variance;
            best_threshold = level as u8;
        }
    }

    best_threshold
}
