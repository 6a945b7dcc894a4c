//! moodlog - Terminal mood journal
//!
//! A command-line mood-tracking application: record one mood rating (1-5)
//! and an optional journal note per day, then browse calendar, history and
//! derived insight views over the recorded entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
