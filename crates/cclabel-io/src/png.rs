//! PNG image format support
//!
//! Images are decoded to 8-bit luminance: palettes and sub-byte depths are
//! expanded, 16-bit samples are stripped, color is reduced with the
//! Rec. 601 weights and alpha is ignored. Output is always 8-bit grayscale.

use crate::{IoError, IoResult};
use cclabel_core::Grid;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::trace;

/// Rec. 601 luma of an 8-bit RGB triple.
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Read a PNG image as 8-bit grayscale
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid<u8>> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let row_bytes = width as usize * channels;
    let data = &buf[..output_info.buffer_size()];
    if bytes_per_row < row_bytes || data.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "PNG frame too short for {}x{} with {} channels",
            width, height, channels
        )));
    }

    let mut gray = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks(bytes_per_row.max(1)).take(height as usize) {
        let row = &row[..row_bytes];
        match channels {
            1 | 2 => gray.extend(row.chunks_exact(channels).map(|px| px[0])),
            _ => gray.extend(
                row.chunks_exact(channels)
                    .map(|px| luminance(px[0], px[1], px[2])),
            ),
        }
    }

    trace!(width, height, ?color_type, "decoded PNG");
    Ok(Grid::from_vec(width, height, gray)?)
}

/// Write an 8-bit grayscale PNG image
///
/// PNG cannot represent an image with a zero dimension, so an empty grid
/// is rejected with [`IoError::InvalidData`].
pub fn write_png<W: Write>(gray: &Grid<u8>, writer: W) -> IoResult<()> {
    let (width, height) = gray.dimensions();
    if gray.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode a {}x{} image",
            width, height
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(gray.as_slice())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
