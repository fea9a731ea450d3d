//! The raw-gray format: an ASCII `width height` line, then one byte per pixel.

use std::io::{BufRead, Read, Write};

use super::{pixel_count, LuminanceImage, MAX_PREALLOC};
use crate::error::DecodeError;

/// Longest header line accepted, newline included.
const MAX_HEADER_LEN: u64 = 64;

/// Read a raw-gray stream.
///
/// The header is the first line, at most 64 bytes long, and must hold
/// exactly two unsigned decimal integers separated by whitespace. Exactly `width * height` bytes are then
/// taken verbatim as samples. Anything after them is ignored.
///
/// # Errors
/// * [`DecodeError::InvalidHeader`] if the first line cannot be parsed
/// * [`DecodeError::ZeroDimension`] / [`DecodeError::TooLarge`] for unusable dimensions
/// * [`DecodeError::Truncated`] if fewer bytes follow than declared
/// * [`DecodeError::Io`] if the underlying reader fails
pub fn read_raw_gray<R: BufRead>(mut reader: R) -> Result<LuminanceImage, DecodeError> {
    let mut header = Vec::new();
    reader
        .by_ref()
        .take(MAX_HEADER_LEN)
        .read_until(b'\n', &mut header)?;
    if header.last() != Some(&b'\n') {
        let reason = if header.len() as u64 >= MAX_HEADER_LEN {
            format!("header line longer than {} bytes", MAX_HEADER_LEN)
        } else {
            "missing newline after dimensions".to_string()
        };
        return Err(DecodeError::InvalidHeader(reason));
    }
    let (width, height) = parse_header(&header)?;
    let expected = pixel_count(width, height)?;

    // Grows with the bytes actually present, not with the declared size.
    let mut samples = Vec::with_capacity(expected.min(MAX_PREALLOC));
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut samples)?;
    if samples.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: samples.len(),
        });
    }

    if !reader.fill_buf()?.is_empty() {
        log::warn!("Ignoring trailing bytes after {}x{} raw-gray data", width, height);
    }

    LuminanceImage::new(width, height, samples)
}

/// Write `img` as raw-gray: `width height\n` followed by the sample bytes.
pub fn write_raw_gray<W: Write>(mut writer: W, img: &LuminanceImage) -> std::io::Result<()> {
    writeln!(writer, "{} {}", img.width(), img.height())?;
    writer.write_all(img.samples())?;
    writer.flush()
}

fn parse_header(line: &[u8]) -> Result<(u32, u32), DecodeError> {
    let text = std::str::from_utf8(line)
        .map_err(|_| DecodeError::InvalidHeader("header is not ASCII".to_string()))?;
    let mut fields = text.split_ascii_whitespace();
    let (Some(w), Some(h), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(DecodeError::InvalidHeader(format!(
            "expected 'width height', got '{}'",
            text.trim_end()
        )));
    };
    let width = parse_dimension(w)?;
    let height = parse_dimension(h)?;
    Ok((width, height))
}

fn parse_dimension(field: &str) -> Result<u32, DecodeError> {
    // u32::from_str accepts a leading '+', the format does not
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidHeader(format!(
            "'{}' is not an unsigned integer",
            field
        )));
    }
    field
        .parse()
        .map_err(|_| DecodeError::InvalidHeader(format!("'{}' is out of range", field)))
}
