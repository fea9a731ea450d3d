//! Bilinear sampling of a luminance image at fractional coordinates.

use crate::image::LuminanceImage;

/// Sample `img` at `(x, y)` with bilinear interpolation.
///
/// The four lattice neighbours are blended horizontally first, giving a
/// top and a bottom value, then vertically. Each blend is truncated to `u8`
/// before it is used again, so the result can sit slightly below what a
/// single fused floating-point blend would give. Output depends on this.
///
/// On integer coordinates the weights are 0 and the sample is returned
/// unchanged.
///
/// # Arguments
/// * `img` - Source image
/// * `x` - Column in `[0, width - 1]`
/// * `y` - Row in `[0, height - 1]`
///
/// Coordinates past the last column or row are clamped to it.
pub fn sample(img: &LuminanceImage, x: f32, y: f32) -> u8 {
    let max_x = img.width() - 1;
    let max_y = img.height() - 1;

    let x1 = (x.floor() as u32).min(max_x);
    let x2 = (x.ceil() as u32).min(max_x);
    let y1 = (y.floor() as u32).min(max_y);
    let y2 = (y.ceil() as u32).min(max_y);

    let wx = x - x1 as f32;
    let wy = y - y1 as f32;

    let top = lerp(img.get(x1, y1), img.get(x2, y1), wx);
    let bottom = lerp(img.get(x1, y2), img.get(x2, y2), wx);
    lerp(top, bottom, wy)
}

#[inline]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    ((1.0 - t) * a as f32 + t * b as f32) as u8
}
