//! Error types for moodlog

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog journal: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Cannot log a mood for a future date: {0}")]
    FutureDate(NaiveDate),

    #[error("Duplicate entry for date: {0}")]
    DuplicateEntry(NaiveDate),

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
            MoodlogError::InvalidTimeReference(_) | MoodlogError::FutureDate(_) => 3,
            MoodlogError::InvalidMood(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
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
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    moodlog log 4\n\
                    moodlog log good yesterday\n\
                    moodlog show 2025-01-15",
                    ref_str
                )
            }
            MoodlogError::InvalidMood(mood_str) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods (score or label):\n\
                    • 1 / terrible\n\
                    • 2 / not-great\n\
                    • 3 / okay\n\
                    • 4 / good\n\
                    • 5 / amazing\n\n\
                    Examples:\n\
                    moodlog log 5\n\
                    moodlog log okay",
                    mood_str
                )
            }
            MoodlogError::FutureDate(date) => {
                format!(
                    "Cannot log a mood for a future date: {}\n\n\
                    Moods can only be recorded for today or past days.\n\
                    Examples:\n\
                    moodlog log 4\n\
                    moodlog log 4 yesterday",
                    date
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: moodlog list --from 2025-01-17 --to 2025-01-31",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
