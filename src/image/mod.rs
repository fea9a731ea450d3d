//! Single-channel luminance images and the decoders that produce them.
//!
//! Two input encodings are supported:
//!
//! 1. **PNG** - any color type or bit depth, reduced to BT.601 luma
//! 2. **raw-gray** - `width height\n` followed by `width*height` sample bytes
//!
//! Both decoders reject zero-sized images, so every [`LuminanceImage`] that
//! leaves this module has at least one pixel.

mod grayscale;
mod png_decoder;
mod raw_gray;

pub use grayscale::{luma, reduce_row_to_luma};
pub use png_decoder::decode_png;
pub use raw_gray::{read_raw_gray, write_raw_gray};

use crate::error::DecodeError;

/// Upper bound on the sample buffer reserved from a declared size before
/// any pixel data has been read.
pub(crate) const MAX_PREALLOC: usize = 16 << 20;

/// An 8-bit single-channel image, row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceImage {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl LuminanceImage {
    /// Build an image from its dimensions and sample buffer.
    ///
    /// # Errors
    /// * [`DecodeError::ZeroDimension`] if either dimension is zero
    /// * [`DecodeError::TooLarge`] if `width * height` overflows `usize`
    /// * [`DecodeError::Truncated`] if `samples.len() != width * height`
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = pixel_count(width, height)?;
        if samples.len() != expected {
            return Err(DecodeError::Truncated {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major sample buffer.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Sample at integer coordinates. Callers keep `x < width`, `y < height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.samples[y as usize * self.width as usize + x as usize]
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

/// Number of samples for the given dimensions, rejecting empty and
/// unaddressable images.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(DecodeError::TooLarge { width, height })
}
