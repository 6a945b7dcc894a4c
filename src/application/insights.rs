//! Insights use case

use crate::domain::stats::{entries_in_month, insight_sentences};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Build the insight sentences for one month's entries, using the
/// configured minimum-entry threshold.
pub fn insights(repository: &FileSystemRepository, year: i32, month: u32) -> Result<Vec<String>> {
    let config = repository.load_config()?;
    let collection = repository.entry_store().load_all()?;

    let month_entries = entries_in_month(&collection, year, month);
    Ok(insight_sentences(&month_entries, config.min_insight_entries))
}
