//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimeReference(_) => 3,
            MoodlogError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to start a mood journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: DD-MM-YYYY (e.g., 17-01-2025)\n\n\
                    Examples:\n\
                    moodlog log 4\n\
                    moodlog log 2 --date yesterday\n\
                    moodlog show last sunday",
                    ref_str
                )
            }
            MoodlogError::Validation(msg) => {
                if msg.contains("mood value") {
                    format!(
                        "{}\n\n\
                        Moods are rated on a 1-5 scale:\n\
                        1 = Rough, 2 = Meh, 3 = Fine, 4 = Great, 5 = Peak\n\
                        Example: moodlog log 4 --journal \"Good day with friends\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MoodlogError::Storage(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Your entry was not saved; retry the command\n\
                    • Check that the journal directory is writable\n\
                    • If the data file is corrupted, 'moodlog clear --yes' resets it",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
