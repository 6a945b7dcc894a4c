//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a mood for a day (overwrites that day's entry)
    Log {
        /// Mood rating: 1 = Rough, 2 = Meh, 3 = Fine, 4 = Great, 5 = Peak
        mood: u8,

        /// Journal note (max 300 characters)
        #[arg(short, long)]
        journal: Option<String>,

        /// Day to log for (today, yesterday, last monday, 17-01-2025, ...)
        #[arg(short, long, value_name = "TIME_REF")]
        date: Option<String>,
    },

    /// Show the entry for one day
    Show {
        /// Day to show (default: today)
        #[arg(value_name = "TIME_REF")]
        when: Option<String>,
    },

    /// List entries, newest first
    History {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Earliest day to include
        #[arg(long, value_name = "TIME_REF")]
        from: Option<String>,

        /// Latest day to include
        #[arg(long, value_name = "TIME_REF")]
        to: Option<String>,
    },

    /// Show a month calendar with mood markers
    Calendar {
        /// Year (default: current)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (default: current)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Show mood pattern insights for a month
    Insights {
        /// Year (default: current)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (default: current)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Show mood distribution and streaks for a month
    Stats {
        /// Year (default: current)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (default: current)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Delete all recorded entries
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
