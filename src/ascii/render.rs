//! Rendering a luminance image to ASCII art.

use std::fmt;
use std::io::{self, Write};

use super::{charset::glyph_for, dimensions::target_dimensions, resample::sample};
use crate::image::LuminanceImage;

/// A grid of density glyphs.
///
/// Every row holds exactly `width` glyphs followed by `'\n'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    width: u32,
    height: u32,
    rows: Vec<String>,
}

impl AsciiArt {
    /// Columns per row, excluding the newline.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows in top-to-bottom order, each ending in `'\n'`.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Write the text form: `width height\n` then every row.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{} {}", self.width, self.height)?;
        for row in &self.rows {
            writer.write_all(row.as_bytes())?;
        }
        writer.flush()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in &self.rows {
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Render `img` as ASCII art.
///
/// The grid size comes from [`target_dimensions`]. Cell `(row, col)` samples
/// the source at `(col * width / char_width, row * height / char_height)`,
/// with no half-pixel offset, and maps the interpolated intensity through
/// the density palette.
pub fn render(img: &LuminanceImage) -> AsciiArt {
    let (char_width, char_height) = target_dimensions(img.width(), img.height());

    let mut rows = Vec::with_capacity(char_height as usize);
    for row in 0..char_height {
        let pixel_y = (row as u64 * img.height() as u64) as f32 / char_height as f32;

        let mut line = String::with_capacity(char_width as usize + 1);
        for col in 0..char_width {
            let pixel_x = (col as u64 * img.width() as u64) as f32 / char_width as f32;
            line.push(glyph_for(sample(img, pixel_x, pixel_y)));
        }
        line.push('\n');
        rows.push(line);
    }

    log::debug!(
        "Rendered {}x{} image to {}x{} glyphs",
        img.width(),
        img.height(),
        char_width,
        char_height
    );

    AsciiArt {
        width: char_width,
        height: char_height,
        rows,
    }
}
