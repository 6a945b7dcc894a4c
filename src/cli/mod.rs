//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_calendar, format_entry, format_history, format_insights, format_stats};
