//! History listing use case

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// List entries newest first, with optional date range and limit.
pub fn history(
    repository: &FileSystemRepository,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<MoodEntry>> {
    let collection = repository.entry_store().load_all()?;

    let mut entries: Vec<MoodEntry> = collection.into_values().collect();

    // Apply date range filters
    if let Some(from_date) = from {
        entries.retain(|e| e.date >= from_date);
    }
    if let Some(to_date) = to {
        entries.retain(|e| e.date <= to_date);
    }

    // Sort by date descending (newest first)
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    // Apply limit
    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
