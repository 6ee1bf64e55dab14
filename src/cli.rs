//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, subcommands, and their
//! validation using the [clap](https://docs.rs/clap/) library.
//!
//! [`Cli::output_options`] accepts a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI flags can override (layered
//! config).

use clap::{Parser, Subcommand};

use tidyfmt::config::{FileConfig, OutputOptions};

/// Formatting and validation subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format an amount as US-dollar currency (e.g. 1234.5 -> $1,234.50)
    Currency {
        /// Amount to format; may be negative or fractional
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Format a date as "<Month> <Day>, <Year>"
    ///
    /// Accepts YYYY-MM-DD or an RFC 3339 timestamp. Timestamps are formatted
    /// using the calendar date in their own offset. Defaults to today's local
    /// date.
    Date {
        /// Date to format (defaults to today)
        date: Option<String>,
    },

    /// Format a byte count as a human-readable size (e.g. 1536 -> 1.5 KB)
    Size {
        /// Number of bytes; must not be negative
        #[arg(allow_negative_numbers = true)]
        bytes: f64,
    },

    /// Check whether a string looks like an email address
    ///
    /// Exits with status 1 when the address is rejected.
    Email {
        /// Candidate address
        #[arg(allow_hyphen_values = true)]
        address: String,
    },

    /// Check a password against the strength rules
    ///
    /// A strong password has at least 8 characters, an uppercase letter, a
    /// lowercase letter and a digit. Exits with status 1 when it is weak.
    Password {
        /// Candidate password
        #[arg(allow_hyphen_values = true)]
        password: String,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Currency { .. } => "currency",
            Self::Date { .. } => "date",
            Self::Size { .. } => "size",
            Self::Email { .. } => "email",
            Self::Password { .. } => "password",
            Self::Config { .. } => "config",
        }
    }
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "tidyfmt")]
#[command(
    about = "Format currency, dates and file sizes, and validate emails and passwords (en-US)"
)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output the result as a single JSON object for scripting/piping
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print diagnostic messages to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

impl Cli {
    /// Whether `--json` was passed on the command line.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Extract output options from CLI args and config file.
    ///
    /// Boolean flags set on the command line win; otherwise the config file
    /// value is used, then the default (`json = false`, `color = true`,
    /// `verbose = false`).
    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        let defaults = OutputOptions::default();

        OutputOptions {
            json: self.json || config.output.json.unwrap_or(defaults.json),
            color: !self.no_color && config.output.color.unwrap_or(defaults.color),
            verbose: self.verbose || config.output.verbose.unwrap_or(defaults.verbose),
        }
    }
}
