//! foo-ascii library crate.
//!
//! Converts PNG images to the raw-gray format and raw-gray images to
//! ASCII art. The binary is a thin wrapper around [`convert::run`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod image;
