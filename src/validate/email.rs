//! Simplified email address shape check.

use std::sync::LazyLock;

use regex::Regex;

/// Something without whitespace or `@`, one `@`, then a domain containing at
/// least one `.` with non-empty text on both sides of it. U+FEFF is excluded
/// alongside `\s`, which does not cover it.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Check whether `email` looks like an email address.
///
/// This is a deliberately loose shape check, not an RFC 5322 parser. It
/// accepts some addresses a full grammar would reject (`a@b..com`) and
/// rejects some it would accept (`user@localhost`, quoted local parts with
/// spaces). The whole string must match.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        assert!(is_valid_email("user+tag@example.io"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("userexample.com"));
    }

    #[test]
    fn test_rejects_multiple_at() {
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exam ple.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
        assert!(!is_valid_email("user@example.com\t"));
    }

    #[test]
    fn test_rejects_byte_order_mark() {
        assert!(!is_valid_email("user\u{FEFF}@example.com"));
        assert!(!is_valid_email("\u{FEFF}user@example.com"));
        assert!(!is_valid_email("user@example.com\u{FEFF}"));
        assert!(!is_valid_email("user@exa\u{FEFF}mple.com"));
    }

    #[test]
    fn test_rejects_unicode_whitespace() {
        assert!(!is_valid_email("user\u{00A0}@example.com"));
        assert!(!is_valid_email("user@example\u{2003}.com"));
    }

    #[test]
    fn test_loose_shapes_are_still_accepted() {
        assert!(is_valid_email("user@example..com"));
        assert!(is_valid_email("\"quoted\"@example.com"));
        assert!(is_valid_email("ünïcode@exämple.de"));
    }
}
