//! wafsync command line
//!
//! Argument parsing, configuration layering and report rendering. The
//! binary in `main.rs` wires these to the WAFv2 adapter.

pub mod args;
pub mod report;
pub mod settings;

pub use args::{Cli, OutputFormat};
