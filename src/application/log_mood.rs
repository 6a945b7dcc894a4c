//! Log mood use case

use crate::domain::{Mood, MoodEntry, TimeReference};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::{Datelike, NaiveDate};

/// Maximum journal note length, in characters
pub const MAX_JOURNAL_CHARS: usize = 300;

/// Service for recording one mood entry per day
pub struct LogMoodService {
    repository: FileSystemRepository,
}

impl LogMoodService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LogMoodService { repository }
    }

    /// Validate inputs, resolve the target day and save the entry.
    /// An existing entry for that day is overwritten whole.
    pub fn execute(
        &self,
        mood_value: u8,
        journal: Option<String>,
        when: Option<&str>,
        today: NaiveDate,
    ) -> Result<MoodEntry> {
        let mood = Mood::from_value(mood_value).ok_or_else(|| {
            MoodlogError::Validation(format!(
                "Invalid mood value: {} (must be 1-5)",
                mood_value
            ))
        })?;

        let journal = journal.unwrap_or_default();
        if journal.chars().count() > MAX_JOURNAL_CHARS {
            return Err(MoodlogError::Validation(format!(
                "Journal note too long: {} characters (max {})",
                journal.chars().count(),
                MAX_JOURNAL_CHARS
            )));
        }

        let date = match when {
            Some(time_ref_str) => TimeReference::parse(time_ref_str)?.resolve(today),
            None => today,
        };
        if date > today {
            return Err(MoodlogError::Validation(format!(
                "Cannot log a mood for a future date: {}",
                date
            )));
        }

        let entry = MoodEntry::new(date, mood, journal, pick_advice(mood, date).to_string());
        self.repository.entry_store().save(&entry)?;
        Ok(entry)
    }
}

/// Pick the advice line snapshotted into an entry. Deterministic per day
/// so re-saving the same day keeps the same advice.
fn pick_advice(mood: Mood, date: NaiveDate) -> &'static str {
    let lines = mood.advice();
    lines[date.ordinal0() as usize % lines.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::JournalRepository;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LogMoodService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let service = LogMoodService::new(repo);
        (temp, service)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_log_saves_entry_for_today() {
        let (temp, service) = setup();
        let entry = service
            .execute(5, Some("sunny".to_string()), None, today())
            .unwrap();

        assert_eq!(entry.date, today());
        assert_eq!(entry.mood, Mood::Peak);
        assert!(!entry.advice.is_empty());

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let loaded = repo.entry_store().load_one(today()).unwrap().unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_log_rejects_out_of_range_mood() {
        let (_temp, service) = setup();
        for bad in [0, 6, 99] {
            let err = service.execute(bad, None, None, today()).unwrap_err();
            assert!(matches!(err, MoodlogError::Validation(_)));
        }
    }

    #[test]
    fn test_log_rejects_long_journal() {
        let (_temp, service) = setup();
        let long = "x".repeat(MAX_JOURNAL_CHARS + 1);
        let err = service.execute(3, Some(long), None, today()).unwrap_err();
        assert!(matches!(err, MoodlogError::Validation(_)));

        // Exactly at the limit is fine
        let at_limit = "x".repeat(MAX_JOURNAL_CHARS);
        service.execute(3, Some(at_limit), None, today()).unwrap();
    }

    #[test]
    fn test_log_yesterday() {
        let (_temp, service) = setup();
        let entry = service
            .execute(2, None, Some("yesterday"), today())
            .unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn test_log_rejects_future_date() {
        let (_temp, service) = setup();
        let err = service
            .execute(3, None, Some("11-03-2025"), today())
            .unwrap_err();
        assert!(matches!(err, MoodlogError::Validation(_)));
    }

    #[test]
    fn test_log_overwrites_same_day() {
        let (temp, service) = setup();
        service
            .execute(1, Some("rough morning".to_string()), None, today())
            .unwrap();
        service.execute(4, None, None, today()).unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let loaded = repo.entry_store().load_one(today()).unwrap().unwrap();
        assert_eq!(loaded.mood, Mood::Great);
        assert_eq!(loaded.journal, "");
    }

    #[test]
    fn test_advice_is_deterministic_per_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(pick_advice(Mood::Fine, date), pick_advice(Mood::Fine, date));
        assert!(Mood::Fine.advice().contains(&pick_advice(Mood::Fine, date)));
    }
}
