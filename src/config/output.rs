//! Output configuration for the command-line front end.
//!
//! This module defines the options that control how results are printed
//! once CLI flags and config-file values have been merged.

/// Resolved output behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print a single JSON object instead of human-readable text
    pub json: bool,

    /// Use colors in human-readable output
    pub color: bool,

    /// Print diagnostic messages to stderr
    pub verbose: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
            verbose: false,
        }
    }
}
