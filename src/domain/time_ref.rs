//! Time reference parsing and resolution
//!
//! Mood entries are always recorded for today or a past day, so the
//! grammar accepts today/yesterday, weekday names (most recent
//! occurrence), "last <weekday>" and explicit DD-MM-YYYY dates.

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A time reference that can be resolved to a specific past-or-present date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            _ if normalized.starts_with("last ") => parse_weekday_name(&normalized[5..])
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| MoodlogError::InvalidTimeReference(input.to_string())),
            _ => {
                if let Some(weekday) = parse_weekday_name(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                // Try parsing as DD-MM-YYYY
                NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| MoodlogError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this time reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Weekday(target_day) => {
                // Most recent occurrence, today included
                let days_back = (base_date.weekday().num_days_from_monday() + 7
                    - target_day.num_days_from_monday())
                    % 7;
                base_date - Duration::days(days_back as i64)
            }
            TimeReference::LastWeekday(target_day) => {
                // Previous occurrence, strictly before today
                let days_back = (base_date.weekday().num_days_from_monday() + 7
                    - target_day.num_days_from_monday())
                    % 7;
                let days_back = if days_back == 0 { 7 } else { days_back };
                base_date - Duration::days(days_back as i64)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
