// src/utils/date.rs

//! Calendar date helpers for the `YYYY-MM-DD` wire format.

use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, Result};

/// chrono pattern matching the endpoint's `YYYY-MM-DD` dates.
pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, naming the field in the error.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, WIRE_FORMAT)
        .map_err(|e| AppError::date_parse(field, value, e))
}

/// Format a date for the wire.
pub fn format_date(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Same month and day one year later.
///
/// Feb 29 has no counterpart in a common year and rolls over to Mar 1.
pub fn add_one_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Render the `daterange` request field: `"<from> - <to>"`.
pub fn format_range(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} - {}", format_date(from), format_date(to))
}

/// Parse a `daterange` field back into its two dates.
#[cfg(test)]
pub(crate) fn parse_range(value: &str) -> Result<(NaiveDate, NaiveDate)> {
    let (from, to) = value
        .split_once(" - ")
        .ok_or_else(|| AppError::date_parse("daterange", value, "missing ' - ' separator"))?;
    Ok((parse_date("daterange", from)?, parse_date("daterange", to)?))
}
