//! Show single entry use case

use crate::domain::{MoodEntry, TimeReference};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Resolve a time reference and look up that day's entry.
pub fn show_entry(
    repository: &FileSystemRepository,
    when: Option<&str>,
    today: NaiveDate,
) -> Result<(NaiveDate, Option<MoodEntry>)> {
    let date = match when {
        Some(time_ref_str) => TimeReference::parse(time_ref_str)?.resolve(today),
        None => today,
    };
    let entry = repository.entry_store().load_one(date)?;
    Ok((date, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use crate::infrastructure::JournalRepository;
    use tempfile::TempDir;

    #[test]
    fn test_show_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let entry = MoodEntry::new(today, Mood::Fine, "ok".to_string(), String::new());
        repo.entry_store().save(&entry).unwrap();

        let (date, found) = show_entry(&repo, None, today).unwrap();
        assert_eq!(date, today);
        assert_eq!(found, Some(entry));

        let (date, found) = show_entry(&repo, Some("yesterday"), today).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(found, None);
    }
}
