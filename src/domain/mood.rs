//! Mood scale definitions and display vocabulary

use crate::error::MoodlogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five-point mood scale
///
/// Serialized as its numeric score (1-5), so an out-of-range score in
/// stored data fails at deserialization rather than at lookup time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Mood {
    /// Score 1
    Terrible,
    /// Score 2
    NotGreat,
    /// Score 3
    Okay,
    /// Score 4
    Good,
    /// Score 5
    Amazing,
}

/// All moods in ascending score order
pub const MOOD_SCALE: [Mood; 5] = [
    Mood::Terrible,
    Mood::NotGreat,
    Mood::Okay,
    Mood::Good,
    Mood::Amazing,
];

impl Mood {
    /// Numeric score on the 1-5 scale
    pub fn score(&self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::NotGreat => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Amazing => 5,
        }
    }

    /// Emoji representation shared by all presentation surfaces
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Terrible => "😢",
            Mood::NotGreat => "😔",
            Mood::Okay => "😐",
            Mood::Good => "😊",
            Mood::Amazing => "😄",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Terrible => "Terrible",
            Mood::NotGreat => "Not Great",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Amazing => "Amazing",
        }
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> u8 {
        mood.score()
    }
}

impl TryFrom<u8> for Mood {
    type Error = MoodlogError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        match score {
            1 => Ok(Mood::Terrible),
            2 => Ok(Mood::NotGreat),
            3 => Ok(Mood::Okay),
            4 => Ok(Mood::Good),
            5 => Ok(Mood::Amazing),
            _ => Err(MoodlogError::InvalidMood(score.to_string())),
        }
    }
}

impl FromStr for Mood {
    type Err = MoodlogError;

    /// Parse a mood from its score ("4") or its label ("good", "not-great"),
    /// case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        if let Ok(score) = normalized.parse::<u8>() {
            return Mood::try_from(score).map_err(|_| MoodlogError::InvalidMood(s.to_string()));
        }

        match normalized.as_str() {
            "terrible" => Ok(Mood::Terrible),
            "not-great" | "notgreat" => Ok(Mood::NotGreat),
            "okay" | "ok" => Ok(Mood::Okay),
            "good" => Ok(Mood::Good),
            "amazing" => Ok(Mood::Amazing),
            _ => Err(MoodlogError::InvalidMood(s.to_string())),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
