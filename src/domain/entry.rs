//! Mood entry model

use crate::domain::date_key::to_date_key;
use crate::domain::Mood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded mood for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Local calendar day; acts as the primary key
    pub date: NaiveDate,
    pub mood: Mood,
    /// Free-text note, may be empty
    pub journal: String,
    /// Snapshot of the advice line shown at save time; never recomputed
    #[serde(default)]
    pub advice: String,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, journal: String, advice: String) -> Self {
        MoodEntry {
            date,
            mood,
            journal,
            advice,
        }
    }

    /// The canonical storage key for this entry
    pub fn date_key(&self) -> String {
        to_date_key(self.date)
    }
}

/// The full persisted mapping of days to entries, at most one per day
pub type EntryCollection = BTreeMap<NaiveDate, MoodEntry>;
