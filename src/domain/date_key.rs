//! Canonical date-key handling
//!
//! Entries are keyed by the local calendar day, written as `YYYY-MM-DD`.
//! Older data files sometimes stored a full ISO-8601 timestamp instead of
//! the bare day, so parsing strips anything from the first `T` onward
//! before reading the date. All date-key conversions in the crate go
//! through these functions.

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, NaiveDate};

/// Format a date as a canonical `YYYY-MM-DD` key
pub fn to_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date key, tolerating a trailing ISO-8601 time component
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    let day_part = key.split('T').next().unwrap_or(key).trim();
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .map_err(|_| MoodlogError::Validation(format!("Invalid date key: '{}'", key)))
}

/// Day-of-week index with Sunday = 0 through Saturday = 6
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Weekday names indexed by [`weekday_index`]
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month names indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
