//! US-dollar currency formatting.

use crate::error::{FormatError, Result};

/// Format an amount as US-dollar currency.
///
/// The result has a leading `$`, a `,` between every group of three whole
/// digits and exactly two fractional digits. Negative amounts are prefixed
/// with `-` before the dollar sign, including amounts that round to zero
/// cents and negative zero (`-$0.00`). Rounding works on the shortest decimal
/// form of `amount` (the digits `1.005` prints as, not its exact binary
/// value), with half-cent ties rounded away from zero.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] if `amount` is NaN or infinite.
///
/// # Examples
///
/// ```
/// # use tidyfmt::format_currency;
/// assert_eq!(format_currency(1234.5).unwrap(), "$1,234.50");
/// assert_eq!(format_currency(-12.0).unwrap(), "-$12.00");
/// ```
pub fn format_currency(amount: f64) -> Result<String> {
    if !amount.is_finite() {
        return Err(FormatError::invalid_argument(
            "Amount must be a finite number",
        ));
    }

    let (whole, cents) = round_to_cents(amount.abs());
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    Ok(format!("{sign}${}.{cents}", group_thousands(&whole)))
}

/// Split a non-negative finite amount into whole digits and two cent digits.
///
/// Starts from the shortest decimal string that round-trips to `amount`, so
/// a third fractional digit of 5 or more always rounds the cents up.
fn round_to_cents(amount: f64) -> (String, String) {
    let shortest = amount.to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut digits);
    }

    let cents = digits.split_off(digits.len() - 2);
    let to_string = |bytes: &[u8]| -> String { bytes.iter().copied().map(char::from).collect() };

    (to_string(digits.as_slice()), to_string(cents.as_slice()))
}

/// Add one to a string of ASCII decimal digits, carrying as needed.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }

    digits.insert(0, b'1');
}

/// Insert a `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(1234.5).unwrap(), "$1,234.50");
        assert_eq!(format_currency(0.0).unwrap(), "$0.00");
        assert_eq!(format_currency(7.0).unwrap(), "$7.00");
        assert_eq!(format_currency(999.99).unwrap(), "$999.99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-12.0).unwrap(), "-$12.00");
        assert_eq!(format_currency(-1234.5).unwrap(), "-$1,234.50");
    }

    #[test]
    fn test_format_currency_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(format_currency(-0.001).unwrap(), "-$0.00");
        assert_eq!(format_currency(-0.0).unwrap(), "-$0.00");
    }

    #[test]
    fn test_format_currency_half_cent_rounds_away_from_zero() {
        assert_eq!(format_currency(0.125).unwrap(), "$0.13");
        assert_eq!(format_currency(10.125).unwrap(), "$10.13");
        assert_eq!(format_currency(1.005).unwrap(), "$1.01");
        assert_eq!(format_currency(-1.005).unwrap(), "-$1.01");
        assert_eq!(format_currency(0.004_999).unwrap(), "$0.00");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(1_234_567.891).unwrap(), "$1,234,567.89");
        assert_eq!(format_currency(0.1 + 0.2).unwrap(), "$0.30");
        assert_eq!(format_currency(2.499).unwrap(), "$2.50");
    }

    #[test]
    fn test_format_currency_rounding_carries_into_thousands() {
        assert_eq!(format_currency(999.999).unwrap(), "$1,000.00");
    }

    #[test]
    fn test_format_currency_large_amounts() {
        assert_eq!(format_currency(1_000_000.0).unwrap(), "$1,000,000.00");
        assert_eq!(
            format_currency(1e15).unwrap(),
            "$1,000,000,000,000,000.00"
        );
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = format_currency(value).unwrap_err();
            assert_eq!(
                err,
                FormatError::InvalidArgument("Amount must be a finite number".to_string())
            );
        }
    }

    #[test]
    fn test_format_currency_shape() {
        for amount in [0.0, 0.004, 1.0, 12.345, 1024.0, 99_999.5, 123_456_789.01] {
            let formatted = format_currency(amount).unwrap();
            assert!(formatted.starts_with('$'), "{formatted}");

            let (_, fraction) = formatted.split_once('.').unwrap();
            assert_eq!(formatted.matches('.').count(), 1, "{formatted}");
            assert_eq!(fraction.len(), 2, "{formatted}");
            assert!(fraction.chars().all(|c| c.is_ascii_digit()), "{formatted}");
        }
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.0), ("0".to_string(), "00".to_string()));
        assert_eq!(round_to_cents(7.5), ("7".to_string(), "50".to_string()));
        assert_eq!(round_to_cents(9.995), ("10".to_string(), "00".to_string()));
        assert_eq!(round_to_cents(1e15), ("1000000000000000".to_string(), "00".to_string()));
    }

    #[test]
    fn test_increment_decimal() {
        let mut digits = b"129".to_vec();
        increment_decimal(&mut digits);
        assert_eq!(digits, b"130");

        let mut digits = b"999".to_vec();
        increment_decimal(&mut digits);
        assert_eq!(digits, b"1000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
