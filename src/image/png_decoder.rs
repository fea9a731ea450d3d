//! PNG decoding into a [`LuminanceImage`].
//!
//! The `png` crate is asked to expand palettes, low bit depths and tRNS and
//! to strip 16-bit channels, so every row arrives as 8-bit gray, gray+alpha,
//! RGB or RGBA. Each row is reduced to luma as soon as it is produced; the
//! full color image is never held in memory for non-interlaced input.

use std::io::Read;

use png::{ColorType, Decoder, Transformations};

use super::{grayscale::reduce_row_to_luma, pixel_count, LuminanceImage, MAX_PREALLOC};
use crate::error::DecodeError;

/// Decode a PNG stream to luminance.
///
/// # Errors
/// * [`DecodeError::Png`] for a bad signature, corrupt chunk or any other
///   decoder failure
/// * [`DecodeError::UnsupportedColor`] if the expanded rows are not gray,
///   gray+alpha, RGB or RGBA
/// * [`DecodeError::ZeroDimension`] / [`DecodeError::TooLarge`] for
///   unusable dimensions
/// * [`DecodeError::Truncated`] if the image data ends early
pub fn decode_png<R: Read>(reader: R) -> Result<LuminanceImage, DecodeError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let interlaced = info.interlaced;
    let source_color = info.color_type;
    let source_depth = info.bit_depth;
    let expected = pixel_count(width, height)?;

    let (color_type, _) = reader.output_color_type();
    let channels =
        channel_count(color_type).ok_or(DecodeError::UnsupportedColor(color_type))?;
    log::debug!(
        "PNG {}x{} {:?}/{:?} -> {:?}, interlaced: {}",
        width,
        height,
        source_color,
        source_depth,
        color_type,
        interlaced
    );

    let mut samples = Vec::with_capacity(expected.min(MAX_PREALLOC));

    if interlaced {
        // Adam7 rows come out per pass; let the decoder assemble the frame.
        let mut frame = vec![0u8; reader.output_buffer_size()];
        let output = reader.next_frame(&mut frame)?;
        for row in frame[..output.buffer_size()].chunks_exact(output.line_size) {
            reduce_row_to_luma(row, channels, &mut samples);
        }
    } else {
        while let Some(row) = reader.next_row()? {
            reduce_row_to_luma(row.data(), channels, &mut samples);
        }
    }

    LuminanceImage::new(width, height, samples)
}

fn channel_count(color_type: ColorType) -> Option<usize> {
    match color_type {
        ColorType::Grayscale => Some(1),
        ColorType::GrayscaleAlpha => Some(2),
        ColorType::Rgb => Some(3),
        ColorType::Rgba => Some(4),
        // EXPAND turns indexed into RGB(A)
        ColorType::Indexed => None,
    }
}
