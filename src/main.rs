use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use moodlog::application::{
    clear, history, init, insights, month_view, monthly_stats, show_entry, ConfigService,
    LogMoodService,
};
use moodlog::cli::{
    format_calendar, format_entry, format_history, format_insights, format_stats, Cli, Commands,
};
use moodlog::domain::TimeReference;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    // Entries are keyed by the local wall-clock day, never UTC
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Log {
            mood,
            journal,
            date,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = LogMoodService::new(repo);
            let entry = service.execute(mood, journal, date.as_deref(), today)?;
            println!(
                "Logged {} {} for {}",
                entry.mood.emoji(),
                entry.mood.label(),
                entry.date.format("%d-%m-%Y")
            );
            if !entry.advice.is_empty() {
                println!("Advice: {}", entry.advice);
            }
            if entry.journal.is_empty() {
                println!(
                    "{} Add a note with: moodlog log {} --journal \"...\"",
                    entry.mood.journal_prompt(),
                    entry.mood.value()
                );
            }
            Ok(())
        }
        Commands::Show { when } => {
            let repo = FileSystemRepository::discover()?;
            let (date, entry) = show_entry(&repo, when.as_deref(), today)?;
            match entry {
                Some(entry) => print!("{}", format_entry(&entry)),
                None => println!("No entry for {}", date.format("%d-%m-%Y")),
            }
            Ok(())
        }
        Commands::History { limit, from, to } => {
            let repo = FileSystemRepository::discover()?;
            let from = resolve_optional_date(from.as_deref(), today)?;
            let to = resolve_optional_date(to.as_deref(), today)?;
            let entries = history(&repo, from, to, limit)?;
            println!("{}", format_history(&entries).trim_end());
            Ok(())
        }
        Commands::Calendar { year, month } => {
            let repo = FileSystemRepository::discover()?;
            let (year, month) = resolve_month(year, month, today)?;
            let view = month_view(&repo, year, month)?;
            print!("{}", format_calendar(&view));
            Ok(())
        }
        Commands::Insights { year, month } => {
            let repo = FileSystemRepository::discover()?;
            let (year, month) = resolve_month(year, month, today)?;
            let sentences = insights(&repo, year, month)?;
            print!("{}", format_insights(&sentences));
            Ok(())
        }
        Commands::Stats { year, month } => {
            let repo = FileSystemRepository::discover()?;
            let (year, month) = resolve_month(year, month, today)?;
            let stats = monthly_stats(&repo, year, month, today)?;
            print!("{}", format_stats(&stats));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("min_insight_entries = {}", config.min_insight_entries);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: min_insight_entries, created");
                Ok(())
            }
        }
        Commands::Clear { yes } => {
            let repo = FileSystemRepository::discover()?;
            if !yes {
                println!("This deletes every recorded entry. Re-run with --yes to confirm.");
                return Ok(());
            }
            clear::clear_all(&repo)?;
            println!("All entries cleared");
            Ok(())
        }
    }
}

fn resolve_optional_date(
    when: Option<&str>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, MoodlogError> {
    match when {
        Some(s) => Ok(Some(TimeReference::parse(s)?.resolve(today))),
        None => Ok(None),
    }
}

fn resolve_month(
    year: Option<i32>,
    month: Option<u32>,
    today: NaiveDate,
) -> Result<(i32, u32), MoodlogError> {
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    if !(1..=12).contains(&month) {
        return Err(MoodlogError::Validation(format!(
            "Invalid month: {} (must be 1-12)",
            month
        )));
    }
    Ok((year, month))
}
