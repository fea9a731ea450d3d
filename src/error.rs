//! Error types for decoding and conversion.
//!
//! [`DecodeError`] describes what is wrong with an input stream and knows
//! nothing about files. [`ConvertError`] wraps it together with the path of
//! the file being processed, which is what ends up on stderr.

use std::path::PathBuf;

/// Errors raised while decoding a PNG or raw-gray stream.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Header line is missing or not two unsigned integers
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Image has no pixels
    #[error("image has zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    /// Pixel count does not fit in memory addressing
    #[error("image dimensions too large ({width}x{height})")]
    TooLarge { width: u32, height: u32 },

    /// Fewer pixel bytes than the header declared
    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Decoder produced a sample layout other than gray, gray+alpha, RGB or RGBA
    #[error("unsupported PNG output color type {0:?}")]
    UnsupportedColor(png::ColorType),

    /// PNG signature, chunk or transform failure
    #[error("PNG decode failed: {0}")]
    Png(#[from] png::DecodingError),

    /// Read failure on an already opened stream
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a conversion, each tied to the file involved.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to open {role} file '{}': {source}", .path.display())]
    Open {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode input file '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to write output file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing output file '{}'", .path.display())]
    OutputExists { path: PathBuf },
}

/// Which side of a conversion a file is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Output,
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileRole::Input => write!(f, "input"),
            FileRole::Output => write!(f, "output"),
        }
    }
}

impl ConvertError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::Open { path, .. }
            | ConvertError::Decode { path, .. }
            | ConvertError::Write { path, .. }
            | ConvertError::OutputExists { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_names_file_and_role() {
        let err = ConvertError::Open {
            role: FileRole::Input,
            path: PathBuf::from("/tmp/missing.foo"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to open input file"));
        assert!(msg.contains("/tmp/missing.foo"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = ConvertError::Decode {
            path: PathBuf::from("in.foo"),
            source: DecodeError::Truncated {
                expected: 8,
                actual: 3,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("in.foo"));
        assert!(msg.contains("expected 8 bytes, got 3"));
    }

    #[test]
    fn test_write_error_display() {
        let err = ConvertError::Write {
            path: PathBuf::from("out.foo2"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write output file 'out.foo2': disk full"
        );
    }

    #[test]
    fn test_error_path_accessor() {
        let err = ConvertError::OutputExists {
            path: PathBuf::from("exists.foo"),
        };
        assert_eq!(err.path(), std::path::Path::new("exists.foo"));
        assert!(err.to_string().contains("Refusing to overwrite"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = ConvertError::Decode {
            path: PathBuf::from("x"),
            source: DecodeError::ZeroDimension {
                width: 0,
                height: 3,
            },
        };
        let source = err.source().expect("decode error has a source");
        assert_eq!(source.to_string(), "image has zero dimension (0x3)");
    }
}
