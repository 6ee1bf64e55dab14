//! Human-readable byte-size formatting.
//!
//! Byte counts are scaled by powers of 1024 and labelled with the short
//! forms B, KB, MB, GB and TB. The unit is picked by comparing against the
//! exact power-of-1024 thresholds rather than through a logarithm, so values
//! sitting exactly on a boundary (1024, 1024², ...) always land in the
//! larger unit.

use std::fmt;

use crate::error::{FormatError, Result};

/// Magnitude unit used when displaying a byte count.
///
/// Units are ordered, each one 1024 times the previous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    /// Bytes
    B,
    /// 1024 bytes
    KB,
    /// 1024² bytes
    MB,
    /// 1024³ bytes
    GB,
    /// 1024⁴ bytes, the largest unit
    TB,
}

impl SizeUnit {
    /// All units, smallest first.
    pub const ALL: [Self; 5] = [Self::B, Self::KB, Self::MB, Self::GB, Self::TB];

    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::B => 1.0,
            Self::KB => 1_024.0,
            Self::MB => 1_048_576.0,
            Self::GB => 1_073_741_824.0,
            Self::TB => 1_099_511_627_776.0,
        }
    }

    /// Short label printed after the number.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
        }
    }

    /// Select the largest unit whose size does not exceed `bytes`.
    ///
    /// Anything below one KB (including fractions of a byte) stays in
    /// [`SizeUnit::B`]; anything from one TB upward stays in [`SizeUnit::TB`].
    #[must_use]
    pub fn for_bytes(bytes: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|unit| bytes >= unit.divisor())
            .unwrap_or(Self::B)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Format a byte count as a human-readable size, e.g. `"1.5 KB"`.
///
/// The scaled value is rounded to one decimal place and printed without a
/// trailing `.0`, followed by a single space and the unit. Zero is always
/// `"0 B"`. Counts beyond 1024 TB keep the TB unit and simply grow
/// (`1024⁵` bytes is `"1024 TB"`).
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] with the message
/// `"Bytes must be non-negative"` if `bytes` is negative, or
/// `"Bytes must be a finite number"` if it is NaN or infinite.
///
/// # Examples
///
/// ```
/// # use tidyfmt::format_file_size;
/// assert_eq!(format_file_size(0.0).unwrap(), "0 B");
/// assert_eq!(format_file_size(1536.0).unwrap(), "1.5 KB");
/// assert_eq!(format_file_size(1_048_576.0).unwrap(), "1 MB");
/// ```
#[allow(clippy::float_cmp)]
pub fn format_file_size(bytes: f64) -> Result<String> {
    if bytes < 0.0 {
        return Err(FormatError::invalid_argument("Bytes must be non-negative"));
    }

    if !bytes.is_finite() {
        return Err(FormatError::invalid_argument(
            "Bytes must be a finite number",
        ));
    }

    if bytes == 0.0 {
        return Ok("0 B".to_string());
    }

    let unit = SizeUnit::for_bytes(bytes);
    let scaled = round_to_tenths(bytes / unit.divisor());

    Ok(format!("{scaled} {unit}"))
}

/// Round to one decimal place, halves away from zero.
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0.0).unwrap(), "0 B");
        assert_eq!(format_file_size(-0.0).unwrap(), "0 B");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(1.0).unwrap(), "1 B");
        assert_eq!(format_file_size(512.0).unwrap(), "512 B");
        assert_eq!(format_file_size(1023.0).unwrap(), "1023 B");
    }

    #[test]
    fn test_format_file_size_fraction_of_a_byte() {
        assert_eq!(format_file_size(0.5).unwrap(), "0.5 B");
    }

    #[test]
    fn test_format_file_size_exact_boundaries() {
        assert_eq!(format_file_size(1024.0).unwrap(), "1 KB");
        assert_eq!(format_file_size(1_048_576.0).unwrap(), "1 MB");
        assert_eq!(format_file_size(1_073_741_824.0).unwrap(), "1 GB");
        assert_eq!(format_file_size(1_099_511_627_776.0).unwrap(), "1 TB");
    }

    #[test]
    fn test_format_file_size_fractional_values() {
        assert_eq!(format_file_size(1536.0).unwrap(), "1.5 KB");
        assert_eq!(format_file_size(1280.0).unwrap(), "1.3 KB");
        assert_eq!(format_file_size(1025.0).unwrap(), "1 KB");
        assert_eq!(format_file_size(1_572_864.0).unwrap(), "1.5 MB");
    }

    #[test]
    fn test_format_file_size_rounds_up_within_unit() {
        // 1048575 bytes is just under 1 MB; the KB value rounds to 1024.
        assert_eq!(format_file_size(1_048_575.0).unwrap(), "1024 KB");
    }

    #[test]
    fn test_format_file_size_beyond_terabytes() {
        assert_eq!(format_file_size(1_125_899_906_842_624.0).unwrap(), "1024 TB");
    }

    #[test]
    fn test_format_file_size_negative() {
        for value in [-1.0, -0.5, -1024.0, f64::NEG_INFINITY] {
            let err = format_file_size(value).unwrap_err();
            assert_eq!(err.to_string(), "Bytes must be non-negative");
        }
    }

    #[test]
    fn test_format_file_size_non_finite() {
        for value in [f64::NAN, f64::INFINITY] {
            let err = format_file_size(value).unwrap_err();
            assert_eq!(
                err,
                FormatError::InvalidArgument("Bytes must be a finite number".to_string())
            );
        }
    }

    #[test]
    fn test_size_unit_for_bytes() {
        assert_eq!(SizeUnit::for_bytes(0.0), SizeUnit::B);
        assert_eq!(SizeUnit::for_bytes(1023.9), SizeUnit::B);
        assert_eq!(SizeUnit::for_bytes(1024.0), SizeUnit::KB);
        assert_eq!(SizeUnit::for_bytes(1_048_575.0), SizeUnit::KB);
        assert_eq!(SizeUnit::for_bytes(1_048_576.0), SizeUnit::MB);
        assert_eq!(SizeUnit::for_bytes(1e18), SizeUnit::TB);
    }

    #[test]
    fn test_size_unit_is_monotonic() {
        let mut previous = SizeUnit::B;
        let mut bytes = 0.0;

        while bytes < 1e16 {
            let unit = SizeUnit::for_bytes(bytes);
            assert!(unit >= previous, "{bytes} mapped to {unit} after {previous}");
            previous = unit;
            bytes = bytes * 1.7 + 1.0;
        }

        assert_eq!(previous, SizeUnit::TB);
    }

    #[test]
    fn test_size_unit_divisors_are_powers_of_1024() {
        for pair in SizeUnit::ALL.windows(2) {
            assert_eq!(pair[1].divisor(), pair[0].divisor() * 1024.0);
        }
    }

    #[test]
    fn test_size_unit_display() {
        let labels: Vec<String> = SizeUnit::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["B", "KB", "MB", "GB", "TB"]);
    }

    #[test]
    fn test_round_to_tenths() {
        assert_eq!(round_to_tenths(1.0), 1.0);
        assert_eq!(round_to_tenths(1.04), 1.0);
        assert_eq!(round_to_tenths(1.25), 1.3);
        assert_eq!(round_to_tenths(1023.96), 1024.0);
    }
}
