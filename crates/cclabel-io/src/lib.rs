//! cclabel-io - Image input and output for cclabel
//!
//! Decodes images into the binary masks consumed by the labelers, and
//! renders label grids back out as viewable grayscale images.
//!
//! # Supported Formats
//!
//! - PNG: all color types and bit depths on read, 8-bit grayscale on write
//!
//! # Examples
//!
//! ```no_run
//! use cclabel_io::{ThresholdMethod, read_mask, write_labels};
//! # fn main() -> cclabel_io::IoResult<()> {
//! let mask = read_mask("binary.png", ThresholdMethod::default())?;
//! # let labels = cclabel_core::LabelGrid::new_like(&mask);
//! write_labels(&labels, "out.png")?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod png;
pub mod render;
pub mod threshold;

pub use cclabel_core;
pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};
pub use render::{normalize_labels, render_labels, render_mask};
pub use threshold::{
    DEFAULT_BYTE_THRESHOLD, DEFAULT_FLOAT_THRESHOLD, ThresholdMethod, compute_otsu_threshold,
    mask_from_float, mask_from_gray, threshold_to_mask,
};

use cclabel_core::{Grid, LabelGrid, Mask};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Read an image file as 8-bit grayscale.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<Grid<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let gray = read_png(BufReader::new(file))?;
    debug!(path = %path.display(), width = gray.width(), height = gray.height(), "read image");
    Ok(gray)
}

/// Read an image file and threshold it to a mask.
pub fn read_mask<P: AsRef<Path>>(path: P, method: ThresholdMethod) -> IoResult<Mask> {
    Ok(mask_from_gray(&read_gray(path)?, method))
}

/// Write an 8-bit grayscale image file.
pub fn write_gray<P: AsRef<Path>>(gray: &Grid<u8>, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_png(gray, BufWriter::new(file))?;
    debug!(path = %path.display(), "wrote image");
    Ok(())
}

/// Write a label grid as a scaled grayscale image (see [`render_labels`]).
pub fn write_labels<P: AsRef<Path>>(labels: &LabelGrid, path: P) -> IoResult<()> {
    write_gray(&render_labels(labels), path)
}

/// Write a mask as a black and white image.
pub fn write_mask<P: AsRef<Path>>(mask: &Mask, path: P) -> IoResult<()> {
    write_gray(&render_mask(mask), path)
}
