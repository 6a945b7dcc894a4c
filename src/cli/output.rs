//! Output formatting utilities

use crate::application::{MonthView, MonthlyStats};
use crate::domain::date_key::MONTH_NAMES;
use crate::domain::{Mood, MoodEntry};

/// Format one entry in full
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut output = format!(
        "{}  {} {} ({}/5)\n",
        entry.date.format("%d-%m-%Y"),
        entry.mood.emoji(),
        entry.mood.label(),
        entry.mood.value()
    );
    if !entry.journal.is_empty() {
        output.push_str(&format!("  Journal: {}\n", entry.journal));
    }
    if !entry.advice.is_empty() {
        output.push_str(&format!("  Advice: {}\n", entry.advice));
    }
    output
}

/// Format a list of entries for display, one line each
pub fn format_history(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {:<5}",
            entry.date.format("%d-%m-%Y"),
            entry.mood.emoji(),
            entry.mood.label()
        ));
        if !entry.journal.is_empty() {
            output.push_str(&format!("  {}", snippet(&entry.journal, 48)));
        }
        output.push('\n');
    }
    output
}

/// Format a month calendar grid, Sunday first
pub fn format_calendar(view: &MonthView) -> String {
    let mut output = format!("{} {}\n", month_name(view.month), view.year);
    output.push_str("Sun Mon Tue Wed Thu Fri Sat\n");

    for (i, cell) in view.cells.iter().enumerate() {
        match cell {
            Some(date) => {
                let day = date.format("%e").to_string();
                match view.entries.get(date) {
                    Some(entry) => output.push_str(&format!("{}{} ", day, entry.mood.emoji())),
                    None => output.push_str(&format!("{}   ", day)),
                }
            }
            None => output.push_str("    "),
        }
        if (i + 1) % 7 == 0 {
            output.push('\n');
        }
    }
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Format insight sentences as a bulleted list
pub fn format_insights(sentences: &[String]) -> String {
    let mut output = String::new();
    for sentence in sentences {
        output.push_str(&format!("• {}\n", sentence));
    }
    output
}

/// Format monthly distribution bars, averages and streaks
pub fn format_stats(stats: &MonthlyStats) -> String {
    let mut output = format!("{} {}\n", month_name(stats.month), stats.year);

    for mood in Mood::ALL.iter().rev() {
        let count = stats.distribution[(mood.value() - 1) as usize];
        output.push_str(&format!(
            "{} {:<5} {:<10} {}\n",
            mood.emoji(),
            mood.label(),
            "█".repeat(count.min(10)),
            count
        ));
    }

    match stats.average {
        Some(avg) => output.push_str(&format!("\nAverage mood: {:.1}/5\n", avg)),
        None => output.push_str("\nNo entries this month\n"),
    }
    output.push_str(&format!("Current streak: {} days\n", stats.current_streak));
    output.push_str(&format!("Longest streak: {} days\n", stats.longest_streak));
    output
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(d: u32, mood: u8, journal: &str) -> MoodEntry {
        MoodEntry::new(
            NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
            Mood::from_value(mood).unwrap(),
            journal.to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_format_entry_full() {
        let mut e = entry(10, 4, "good walk");
        e.advice = "Share your good mood".to_string();
        let output = format_entry(&e);
        assert!(output.contains("10-03-2025"));
        assert!(output.contains("Great (4/5)"));
        assert!(output.contains("Journal: good walk"));
        assert!(output.contains("Advice: Share your good mood"));
    }

    #[test]
    fn test_format_entry_skips_empty_fields() {
        let output = format_entry(&entry(10, 2, ""));
        assert!(!output.contains("Journal:"));
        assert!(!output.contains("Advice:"));
    }

    #[test]
    fn test_format_empty_history() {
        let output = format_history(&[]);
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_history_lines() {
        let entries = vec![entry(10, 5, "celebrated"), entry(9, 1, "")];
        let output = format_history(&entries);
        assert!(output.contains("10-03-2025"));
        assert!(output.contains("Peak"));
        assert!(output.contains("celebrated"));
        assert!(output.contains("09-03-2025"));
        assert!(output.contains("Rough"));
    }

    #[test]
    fn test_format_history_truncates_long_journals() {
        let long = "a".repeat(100);
        let output = format_history(&[entry(10, 3, &long)]);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_format_calendar_header_and_cells() {
        let view = MonthView {
            year: 2025,
            month: 3,
            cells: crate::application::calendar::month_cells(2025, 3),
            entries: [(
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                entry(10, 5, ""),
            )]
            .into_iter()
            .collect(),
        };
        let output = format_calendar(&view);
        assert!(output.contains("March 2025"));
        assert!(output.contains("Sun Mon Tue Wed Thu Fri Sat"));
        assert!(output.contains("😄"));
        assert!(output.contains("31"));
    }

    #[test]
    fn test_format_insights_bullets() {
        let output = format_insights(&["one".to_string(), "two".to_string()]);
        assert_eq!(output, "• one\n• two\n");
    }

    #[test]
    fn test_format_stats() {
        let stats = MonthlyStats {
            year: 2025,
            month: 3,
            distribution: [1, 0, 0, 0, 2],
            average: Some(11.0 / 3.0),
            current_streak: 3,
            longest_streak: 5,
        };
        let output = format_stats(&stats);
        assert!(output.contains("March 2025"));
        assert!(output.contains("Peak"));
        assert!(output.contains("██"));
        assert!(output.contains("Average mood: 3.7/5"));
        assert!(output.contains("Current streak: 3 days"));
        assert!(output.contains("Longest streak: 5 days"));
    }

    #[test]
    fn test_format_stats_empty_month() {
        let stats = MonthlyStats {
            year: 2025,
            month: 4,
            distribution: [0; 5],
            average: None,
            current_streak: 0,
            longest_streak: 0,
        };
        let output = format_stats(&stats);
        assert!(output.contains("No entries this month"));
    }
}
