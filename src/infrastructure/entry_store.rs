//! Mood entry persistence
//!
//! The whole entry collection lives under one well-known key as a JSON
//! map from date key to entry. Every save is a read-modify-write of the
//! full map followed by a single `set`, so from the caller's point of
//! view the collection either updates completely or keeps its prior
//! state.

use crate::domain::date_key::parse_date_key;
use crate::domain::{EntryCollection, Mood, MoodEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::store::KeyValueStore;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Storage key holding the entire entry collection
pub const MOOD_ENTRIES_KEY: &str = "mood_entries";

/// Persisted entry as it appears on disk. Older data may carry a full
/// ISO timestamp in `date`, an out-of-range mood, or no `advice` field;
/// all of that is normalized on read.
#[derive(Debug, Deserialize)]
struct StoredEntry {
    #[serde(default)]
    date: String,
    mood: Mood,
    #[serde(default)]
    journal: String,
    #[serde(default)]
    advice: String,
}

/// CRUD over the persisted entry collection, generic over the storage port
pub struct EntryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(store: S) -> Self {
        EntryStore { store }
    }

    /// Save an entry, overwriting any existing entry for the same day
    pub fn save(&self, entry: &MoodEntry) -> Result<()> {
        let mut collection = self.load_all()?;
        collection.insert(entry.date, entry.clone());

        let keyed: BTreeMap<String, &MoodEntry> = collection
            .values()
            .map(|e| (e.date_key(), e))
            .collect();
        let encoded = serde_json::to_string(&keyed)
            .map_err(|e| MoodlogError::Storage(format!("Failed to encode mood history: {}", e)))?;

        self.store.set(MOOD_ENTRIES_KEY, &encoded)
    }

    /// Load the full collection; a missing key is an empty collection
    pub fn load_all(&self) -> Result<EntryCollection> {
        let Some(raw) = self.store.get(MOOD_ENTRIES_KEY)? else {
            return Ok(EntryCollection::new());
        };

        let stored: BTreeMap<String, StoredEntry> = serde_json::from_str(&raw)
            .map_err(|e| MoodlogError::Storage(format!("Failed to decode mood history: {}", e)))?;

        let mut collection = EntryCollection::new();
        for (key, entry) in stored {
            // Prefer the map key; fall back to the entry's own date field.
            // Entries with no parseable date at all are dropped.
            let Ok(date) = parse_date_key(&key).or_else(|_| parse_date_key(&entry.date)) else {
                continue;
            };
            collection.insert(
                date,
                MoodEntry::new(date, entry.mood, entry.journal, entry.advice),
            );
        }
        Ok(collection)
    }

    /// Look up a single day's entry
    pub fn load_one(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        Ok(self.load_all()?.remove(&date))
    }

    /// Remove the entire collection; idempotent
    pub fn clear_all(&self) -> Result<()> {
        self.store.remove(MOOD_ENTRIES_KEY)
    }
}
