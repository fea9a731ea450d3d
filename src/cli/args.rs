//! CLI argument parsing with clap.

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

use super::enums::ModeArg;

/// Convert PNG images to raw-gray and raw-gray images to ASCII art
#[derive(Parser, Debug)]
#[command(name = "foo-ascii")]
#[command(version, about = "Convert PNG to raw-gray and raw-gray to ASCII art", long_about = None)]
#[command(after_help = "MODES:
    foo2foo2    raw-gray input, ASCII art text output
    png2foo     PNG input, raw-gray output")]
pub struct Args {
    /// Conversion mode
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// File to read
    pub input: PathBuf,

    /// File to write
    pub output: PathBuf,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

impl Args {
    /// Log level from `-v`/`-q`, if either was given.
    pub fn log_level_override(&self) -> Option<log::LevelFilter> {
        self.verbose
            .is_present()
            .then(|| self.verbose.log_level_filter())
    }
}
