//! Application layer - Use cases and orchestration

pub mod calendar;
pub mod clear;
pub mod history;
pub mod init;
pub mod insights;
pub mod log_mood;
pub mod manage_config;
pub mod monthly_stats;
pub mod show_entry;

pub use calendar::{month_view, MonthView};
pub use history::history;
pub use insights::insights;
pub use log_mood::LogMoodService;
pub use manage_config::ConfigService;
pub use monthly_stats::{monthly_stats, MonthlyStats};
pub use show_entry::show_entry;
