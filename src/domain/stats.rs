//! Mood statistics and streak computation

use crate::domain::{Mood, MoodEntry};
use crate::error::{MoodlogError, Result};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Aggregate statistics derived from the full entry set
///
/// Never persisted; recomputed on demand whenever the entries change.
/// `mood_distribution` is sparse: moods that never occur are absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoodStats {
    pub average_mood: f64,
    pub total_entries: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub mood_distribution: BTreeMap<Mood, usize>,
}

/// Compute aggregate statistics from an arbitrary, unordered entry set.
///
/// Pure and deterministic: the result depends only on `entries` and the
/// injected `today`, which anchors the current streak. The empty set is a
/// normal condition and yields all-zero stats. Duplicate dates violate the
/// one-entry-per-date invariant and are rejected.
pub fn compute_stats(entries: &[MoodEntry], today: NaiveDate) -> Result<MoodStats> {
    if entries.is_empty() {
        return Ok(MoodStats::default());
    }

    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    if let Some(pair) = dates.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(MoodlogError::DuplicateEntry(pair[0]));
    }

    let score_sum: u32 = entries.iter().map(|e| u32::from(e.mood.score())).sum();
    let average_mood = f64::from(score_sum) / entries.len() as f64;

    let mut mood_distribution = BTreeMap::new();
    for entry in entries {
        *mood_distribution.entry(entry.mood).or_insert(0) += 1;
    }

    Ok(MoodStats {
        average_mood,
        total_entries: entries.len(),
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
        mood_distribution,
    })
}

/// Consecutive run of logged days ending at `today` or yesterday.
///
/// `dates` must be sorted ascending and duplicate-free. An entry more than
/// one day stale cannot anchor an active streak.
fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&latest) = dates.last() else {
        return 0;
    };
    if latest != today && latest != today - Duration::days(1) {
        return 0;
    }

    let mut streak = 0;
    let mut expected = latest;
    for &date in dates.iter().rev() {
        if date != expected {
            // Dates are unique and descending here, so any mismatch is a gap
            break;
        }
        streak += 1;
        expected = expected - Duration::days(1);
    }
    streak
}

/// Longest run of calendar-consecutive dates anywhere in the history.
///
/// `dates` must be sorted ascending and duplicate-free. A single entry is a
/// streak of length 1; only the empty set yields 0.
fn longest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest.max(run)
}
