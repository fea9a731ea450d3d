//! CLI enum types for the conversion mode.

use clap::ValueEnum;

use crate::convert::Mode;

/// Conversion mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// raw-gray input, ASCII art output
    #[value(name = "foo2foo2")]
    Foo2Foo2,
    /// PNG input, raw-gray output
    #[value(name = "png2foo")]
    Png2Foo,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Foo2Foo2 => Mode::RawGrayToAscii,
            ModeArg::Png2Foo => Mode::PngToRawGray,
        }
    }
}
