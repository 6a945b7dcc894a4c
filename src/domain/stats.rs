//! Mood aggregation
//!
//! Pure read-only derivations over an entry collection: averages, weekday
//! grouping, monthly distributions, streaks and human-readable insight
//! sentences. Nothing here touches storage and nothing here fails; empty
//! or degenerate input degrades to `None`/empty output.

use crate::domain::date_key::{weekday_index, WEEKDAY_NAMES};
use crate::domain::entry::{EntryCollection, MoodEntry};
use chrono::{Datelike, Duration, NaiveDate};

/// Minimum entries in a period before insights are generated
pub const DEFAULT_MIN_INSIGHT_ENTRIES: usize = 7;

/// Best and worst weekdays by average mood, as Sunday-first indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayExtremes {
    pub best: usize,
    pub worst: usize,
}

/// Entries belonging to the given year/month
pub fn entries_in_month(collection: &EntryCollection, year: i32, month: u32) -> Vec<&MoodEntry> {
    collection
        .values()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .collect()
}

/// Arithmetic mean of mood values, or `None` for an empty slice
pub fn average_mood(entries: &[&MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|e| e.mood.value() as u32).sum();
    Some(sum as f64 / entries.len() as f64)
}

/// Mood values grouped by day of week, index 0 = Sunday
pub fn group_by_weekday(entries: &[&MoodEntry]) -> [Vec<u8>; 7] {
    let mut groups: [Vec<u8>; 7] = Default::default();
    for entry in entries {
        groups[weekday_index(entry.date)].push(entry.mood.value());
    }
    groups
}

/// Weekdays with the highest and lowest average mood.
///
/// Defined only when at least two distinct weekdays have data; ties
/// resolve to the weekday encountered first in Sunday-to-Saturday order.
pub fn weekday_extremes(entries: &[&MoodEntry]) -> Option<WeekdayExtremes> {
    let groups = group_by_weekday(entries);

    let mut best: Option<(usize, f64)> = None;
    let mut worst: Option<(usize, f64)> = None;
    let mut populated = 0;

    for (day, moods) in groups.iter().enumerate() {
        if moods.is_empty() {
            continue;
        }
        populated += 1;
        let avg = moods.iter().map(|&m| m as f64).sum::<f64>() / moods.len() as f64;

        if best.is_none_or(|(_, b)| avg > b) {
            best = Some((day, avg));
        }
        if worst.is_none_or(|(_, w)| avg < w) {
            worst = Some((day, avg));
        }
    }

    if populated < 2 {
        return None;
    }

    Some(WeekdayExtremes {
        best: best?.0,
        worst: worst?.0,
    })
}

/// Count of entries per mood value 1..5 for the given month
pub fn monthly_distribution(collection: &EntryCollection, year: i32, month: u32) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for entry in entries_in_month(collection, year, month) {
        counts[(entry.mood.value() - 1) as usize] += 1;
    }
    counts
}

/// Consecutive days logged, counting back from today (or yesterday when
/// today has no entry yet)
pub fn current_streak(collection: &EntryCollection, today: NaiveDate) -> u32 {
    let mut day = if collection.contains_key(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while collection.contains_key(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive logged days anywhere in the collection
pub fn longest_streak(collection: &EntryCollection) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    // BTreeMap keys iterate in ascending date order
    for &date in collection.keys() {
        run = match prev {
            Some(p) if date == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Build the ordered insight sentences for one period's entries.
///
/// Below `min_entries` the only output is a prompt to keep tracking.
/// Otherwise: the weekday-extremes pair when the extremes are defined and
/// actually differ, then always one trend sentence bucketed by the
/// overall average.
pub fn insight_sentences(entries: &[&MoodEntry], min_entries: usize) -> Vec<String> {
    if entries.len() < min_entries {
        return vec!["Track more moods to see patterns and insights!".to_string()];
    }

    let mut sentences = Vec::new();

    if let Some(extremes) = weekday_extremes(entries) {
        if extremes.best != extremes.worst {
            sentences.push(format!(
                "Your lowest moods tend to be on {}s",
                WEEKDAY_NAMES[extremes.worst]
            ));
            sentences.push(format!(
                "{}s are typically your best days",
                WEEKDAY_NAMES[extremes.best]
            ));
        }
    }

    // min_entries is at least 1 here, so the average exists
    if let Some(avg) = average_mood(entries) {
        let trend = if avg >= 4.0 {
            format!(
                "You're doing great! Your average mood this month is {:.1}/5",
                avg
            )
        } else if avg >= 3.0 {
            format!(
                "Your average mood this month is {:.1}/5 - pretty balanced!",
                avg
            )
        } else {
            format!("Consider self-care activities. Your average mood is {:.1}/5", avg)
        };
        sentences.push(trend);
    }

    sentences
}
