//! Mood entry record

use crate::domain::Mood;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One recorded mood for a specific calendar date
///
/// `date` is the unique key; the store holds at most one entry per date.
/// `recorded_at` is the moment of last write, kept for audit only — it
/// never participates in streak logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, recorded_at: DateTime<Utc>) -> Self {
        MoodEntry {
            date,
            mood,
            recorded_at,
        }
    }

    /// Display emoji, derived from the mood (never stored independently)
    pub fn emoji(&self) -> &'static str {
        self.mood.emoji()
    }

    /// Display label, derived from the mood
    pub fn label(&self) -> &'static str {
        self.mood.label()
    }
}
