//! Password strength rules.
//!
//! A strong password is at least [`MIN_PASSWORD_LENGTH`] long, counted in
//! UTF-16 code units (so a character outside the Basic Multilingual Plane,
//! such as an emoji, counts twice), and contains an ASCII uppercase letter,
//! an ASCII lowercase letter and an ASCII digit. There is no special-character rule, no maximum length, and
//! whitespace or repeated characters are allowed.

use std::fmt;

use serde::Serialize;

/// Minimum length of a strong password, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single requirement checked by [`is_strong_password`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// At least [`MIN_PASSWORD_LENGTH`] UTF-16 code units
    MinLength,

    /// At least one character in `A-Z`
    Uppercase,

    /// At least one character in `a-z`
    Lowercase,

    /// At least one character in `0-9`
    Digit,
}

impl PasswordRule {
    /// All rules, in the order they are checked.
    pub const ALL: [Self; 4] = [Self::MinLength, Self::Uppercase, Self::Lowercase, Self::Digit];

    /// Whether `password` satisfies this rule.
    #[must_use]
    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }

}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength => write!(f, "at least {MIN_PASSWORD_LENGTH} characters"),
            Self::Uppercase => f.write_str("an uppercase letter (A-Z)"),
            Self::Lowercase => f.write_str("a lowercase letter (a-z)"),
            Self::Digit => f.write_str("a digit (0-9)"),
        }
    }
}

/// Check whether `password` meets every [`PasswordRule`].
///
/// Stops at the first rule that fails.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    PasswordRule::ALL
        .into_iter()
        .all(|rule| rule.is_met_by(password))
}

/// List the rules `password` fails, in checking order.
///
/// The result is empty exactly when [`is_strong_password`] returns `true`.
#[must_use]
pub fn unmet_password_rules(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_met_by(password))
        .collect()
}
