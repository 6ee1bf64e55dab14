//! Structured JSON output for scripting and piping.
//!
//! Every CLI invocation produces one [`JsonOutput`] record. When the `--json`
//! flag is passed it is serialized to stdout as a single JSON object,
//! replacing all human-readable output; otherwise the same record drives the
//! plain-text rendering.

use serde::Serialize;

use crate::validate::{PasswordRule, is_strong_password, is_valid_email, unmet_password_rules};

/// Result of a single formatting or validation command.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonOutput {
    /// Name of the command that produced this record (`"currency"`, `"email"`, ...).
    pub command: String,

    /// The input as given, or `None` when it must not be echoed (passwords).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Formatted string, present for formatting commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Verdict, present for validation commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,

    /// Password rules that were not met.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmet_rules: Vec<PasswordRule>,

    /// Error message, present when the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonOutput {
    /// Build a record for a formatting command.
    #[must_use]
    pub fn formatted(command: &str, input: impl Into<String>, output: String) -> Self {
        Self {
            command: command.to_string(),
            input: Some(input.into()),
            output: Some(output),
            valid: None,
            unmet_rules: Vec::new(),
            error: None,
        }
    }

    /// Build a record for the `email` command.
    #[must_use]
    pub fn for_email(address: &str) -> Self {
        Self {
            command: "email".to_string(),
            input: Some(address.to_string()),
            output: None,
            valid: Some(is_valid_email(address)),
            unmet_rules: Vec::new(),
            error: None,
        }
    }

    /// Build a record for the `password` command.
    ///
    /// The password itself is never stored in the record.
    #[must_use]
    pub fn for_password(password: &str) -> Self {
        Self {
            command: "password".to_string(),
            input: None,
            output: None,
            valid: Some(is_strong_password(password)),
            unmet_rules: unmet_password_rules(password),
            error: None,
        }
    }

    /// Build a record for a command that failed with `message`.
    #[must_use]
    pub fn failed(command: &str, message: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            input: None,
            output: None,
            valid: None,
            unmet_rules: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// `false` for a failed command or a validation command whose input was
    /// rejected.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none() && !matches!(self.valid, Some(false))
    }
}
