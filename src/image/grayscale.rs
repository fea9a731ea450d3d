//! Color to luminance reduction using the ITU-R BT.601 luma weights.

/// Luma of an RGB triple: `Y = 0.299*R + 0.587*G + 0.114*B`.
///
/// Computed in `f64` and truncated toward zero, never rounded. Gray input
/// goes through the same formula with `R = G = B`, so the result may be one
/// below the gray level when the weighted sum lands just under an integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8
}

/// Reduce one decoded row of interleaved samples to luminance, appending to `out`.
///
/// Rows are 8 bits per channel with `channels` samples per pixel:
/// - 1: gray
/// - 2: gray + alpha
/// - 3: RGB
/// - 4: RGBA
///
/// Alpha is dropped, only the color channels contribute. A trailing
/// partial pixel is ignored.
///
/// # Panics
/// If `channels` is not 1 to 4.
///
/// # Returns
/// The number of luminance samples appended.
pub fn reduce_row_to_luma(row: &[u8], channels: usize, out: &mut Vec<u8>) -> usize {
    let before = out.len();
    match channels {
        1 | 2 => {
            for px in row.chunks_exact(channels) {
                out.push(luma(px[0], px[0], px[0]));
            }
        }
        3 | 4 => {
            for px in row.chunks_exact(channels) {
                out.push(luma(px[0], px[1], px[2]));
            }
        }
        _ => unreachable!("unsupported channel count {}", channels),
    }
    out.len() - before
}
