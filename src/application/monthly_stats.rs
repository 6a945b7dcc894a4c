//! Monthly statistics use case

use crate::domain::stats::{
    average_mood, current_streak, entries_in_month, longest_streak, monthly_distribution,
};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Aggregated numbers for one month plus overall streaks
#[derive(Debug, PartialEq)]
pub struct MonthlyStats {
    pub year: i32,
    pub month: u32,
    /// Entry counts per mood value 1..5
    pub distribution: [usize; 5],
    pub average: Option<f64>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute distribution, average and streaks for the given month.
pub fn monthly_stats(
    repository: &FileSystemRepository,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<MonthlyStats> {
    let collection = repository.entry_store().load_all()?;
    let month_entries = entries_in_month(&collection, year, month);

    Ok(MonthlyStats {
        year,
        month,
        distribution: monthly_distribution(&collection, year, month),
        average: average_mood(&month_entries),
        current_streak: current_streak(&collection, today),
        longest_streak: longest_streak(&collection),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mood, MoodEntry};
    use crate::infrastructure::JournalRepository;
    use tempfile::TempDir;

    #[test]
    fn test_monthly_stats() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let store = repo.entry_store();
        for (d, mood) in [(8, 1), (9, 5), (10, 5)] {
            let entry = MoodEntry::new(
                NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
                Mood::from_value(mood).unwrap(),
                String::new(),
                String::new(),
            );
            store.save(&entry).unwrap();
        }

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let stats = monthly_stats(&repo, 2025, 3, today).unwrap();

        assert_eq!(stats.distribution, [1, 0, 0, 0, 2]);
        assert_eq!(stats.average, Some(11.0 / 3.0));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_monthly_stats_empty_month() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let stats = monthly_stats(&repo, 2025, 3, today).unwrap();
        assert_eq!(stats.distribution, [0; 5]);
        assert_eq!(stats.average, None);
        assert_eq!(stats.current_streak, 0);
    }
}
