//! ASCII art rendering for luminance images.
//!
//! The pipeline:
//!
//! 1. **Grid sizing** - halve the width, derive the height from the source aspect
//! 2. **Resampling** - bilinear sample at each cell's source coordinate
//! 3. **Quantization** - map intensity onto the 69-level density palette

mod charset;
mod dimensions;
mod render;
mod resample;

pub use charset::{glyph_for, palette_index, DENSITY_CHARSET};
pub use dimensions::target_dimensions;
pub use render::{render, AsciiArt};
pub use resample::sample;
