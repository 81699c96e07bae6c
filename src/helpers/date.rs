//! Date helper functions

use chrono::NaiveDate;
use std::fmt::Write;

/// Long-form pattern used when no format is configured ("January 2, 2006")
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a date with a chrono format string, falling back to
/// [`LONG_DATE_FORMAT`] if the string is not a valid pattern
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        tracing::warn!("Invalid date format {:?}, using {:?}", format, LONG_DATE_FORMAT);
        out.clear();
        let _ = write!(out, "{}", date.format(LONG_DATE_FORMAT));
    }
    out
}
