//! Long-form calendar date formatting.
//!
//! Dates are rendered from their own calendar fields. A [`DateTime`] is
//! formatted using the calendar date in its own offset, never converted to
//! another timezone first, so a late-evening timestamp does not drift onto
//! the next day.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::error::{FormatError, Result};

/// Format a date as `"<Month> <Day>, <Year>"`, e.g. `"March 9, 2026"`.
///
/// The month is the full English name and the day has no leading zero.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Format the calendar date of `datetime` as seen in its own offset.
///
/// `2026-03-09T23:30:00-05:00` is `"March 9, 2026"`, even though the same
/// instant is already March 10 in UTC.
#[must_use]
pub fn format_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    format_date(datetime.date_naive())
}

/// Parse a date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// For timestamps, the calendar date in the timestamp's own offset is used.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] if the input is neither form, or
/// names a day that does not exist (e.g. `2026-02-30`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| {
            FormatError::invalid_argument(format!(
                "Invalid date '{input}': expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
}
