//! Configuration for the command-line front end.
//!
//! - [`file`] - the optional `config.toml` and its loader
//! - [`output`] - output options resolved from CLI flags and the config file

pub mod file;
pub mod output;

pub use file::FileConfig;
pub use output::OutputOptions;
