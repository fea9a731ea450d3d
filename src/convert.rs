//! File-to-file conversions.
//!
//! Each conversion reads and decodes its whole input before the output file
//! is created, so a decode failure never leaves an output behind. A write
//! failure may leave a partial output; it is always reported as an error.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use crate::ascii;
use crate::error::{ConvertError, FileRole};
use crate::image::{self, LuminanceImage};

/// Conversion to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// raw-gray in, ASCII art text out
    RawGrayToAscii,
    /// PNG in, raw-gray out
    PngToRawGray,
}

/// Options that apply to every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Replace an existing output file instead of failing
    pub overwrite: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

/// Run `mode` from `input` to `output`.
pub fn run(
    mode: Mode,
    input: &Path,
    output: &Path,
    options: ConvertOptions,
) -> Result<(), ConvertError> {
    match mode {
        Mode::RawGrayToAscii => raw_gray_to_ascii(input, output, options),
        Mode::PngToRawGray => png_to_raw_gray(input, output, options),
    }
}

/// Decode a raw-gray file and write its ASCII art rendering.
pub fn raw_gray_to_ascii(
    input: &Path,
    output: &Path,
    options: ConvertOptions,
) -> Result<(), ConvertError> {
    let img = image::read_raw_gray(open_input(input)?).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let art = ascii::render(&img);

    let writer = create_output(output, options)?;
    art.write_to(writer).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "Converted {} ({}x{}) to {} ({}x{} glyphs)",
        input.display(),
        img.width(),
        img.height(),
        output.display(),
        art.width(),
        art.height()
    );
    Ok(())
}

/// Decode a PNG file to luminance and write it as raw-gray.
pub fn png_to_raw_gray(
    input: &Path,
    output: &Path,
    options: ConvertOptions,
) -> Result<(), ConvertError> {
    let img: LuminanceImage =
        image::decode_png(open_input(input)?).map_err(|source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        })?;

    let writer = create_output(output, options)?;
    image::write_raw_gray(writer, &img).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "Converted {} to {} ({}x{} raw-gray)",
        input.display(),
        output.display(),
        img.width(),
        img.height()
    );
    Ok(())
}

fn open_input(path: &Path) -> Result<BufReader<File>, ConvertError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ConvertError::Open {
            role: FileRole::Input,
            path: path.to_path_buf(),
            source,
        })
}

fn create_output(path: &Path, options: ConvertOptions) -> Result<BufWriter<File>, ConvertError> {
    let mut open = OpenOptions::new();
    open.write(true);
    if options.overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }

    match open.open(path) {
        Ok(file) => Ok(BufWriter::new(file)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && !options.overwrite => {
            Err(ConvertError::OutputExists {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(ConvertError::Open {
            role: FileRole::Output,
            path: path.to_path_buf(),
            source,
        }),
    }
}
