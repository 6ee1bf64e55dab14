//! # tidyfmt
//!
//! Small, pure helpers for turning values into fixed-locale (en-US) display
//! strings and for classifying user-supplied strings.
//!
//! ## Main Parts
//!
//! - [`format`] - currency, calendar date and byte-size formatting
//! - [`validate`] - email shape and password strength predicates
//! - [`config`] - configuration file and resolved output options for the CLI
//! - [`output`] - serializable records for `--json` output
//! - [`error`] - the [`FormatError`] type returned by fallible formatters
//!
//! Every formatter and validator is a stateless function of its input, so
//! they can be called from any thread in any order.

pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod validate;

pub use config::OutputOptions;
pub use error::{FormatError, Result};
pub use format::{
    SizeUnit, format_currency, format_date, format_datetime, format_file_size, parse_date,
};
pub use validate::{PasswordRule, is_strong_password, is_valid_email, unmet_password_rules};
