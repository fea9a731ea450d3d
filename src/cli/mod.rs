//! Command-line interface definitions.
//!
//! `foo-ascii <mode> <input> <output>` where mode is `foo2foo2` or `png2foo`.

mod args;
mod enums;

pub use args::Args;
pub use enums::ModeArg;

/// Exit status for usage and conversion failures (`-1`, seen as 255 on Unix).
pub const EXIT_FAILURE: i32 = -1;
