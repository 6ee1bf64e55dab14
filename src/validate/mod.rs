//! Predicates that classify user-supplied strings.
//!
//! Validators never normalize or modify their input; they only answer
//! whether it conforms.

pub mod email;
pub mod password;

pub use email::is_valid_email;
pub use password::{MIN_PASSWORD_LENGTH, PasswordRule, is_strong_password, unmet_password_rules};
