//! Log mood use case

use crate::domain::{Mood, MoodEntry, TimeReference};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, FileSystemStore};
use chrono::{Local, Utc};
use std::str::FromStr;

/// Outcome of recording a mood
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub entry: MoodEntry,
    /// Mood that was replaced, when the date already had an entry
    pub replaced: Option<Mood>,
}

/// Service for recording moods
pub struct LogMoodService {
    store: FileSystemStore,
}

impl LogMoodService {
    /// Create a new log mood service
    pub fn new(store: FileSystemStore) -> Self {
        LogMoodService { store }
    }

    /// Record the mood for the referenced date (default today), replacing
    /// any existing entry for that date.
    pub fn execute(&self, mood_str: &str, time_ref_str: Option<&str>) -> Result<LogOutcome> {
        // 1. Parse the mood
        let mood = Mood::from_str(mood_str)?;

        // 2. Resolve the target date
        let today = Local::now().date_naive();
        let time_ref = match time_ref_str {
            Some(s) => TimeReference::parse(s)?,
            None => TimeReference::Today,
        };
        let date = time_ref.resolve(today);

        // 3. Moods are recorded for today or past days only
        if date > today {
            return Err(MoodlogError::FutureDate(date));
        }

        // 4. Upsert, remembering what was replaced
        let replaced = self.store.read_one(date)?.map(|e| e.mood);
        let entry = MoodEntry::new(date, mood, Utc::now());
        self.store.upsert(&entry)?;

        Ok(LogOutcome { entry, replaced })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn service() -> (TempDir, LogMoodService) {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        (temp, LogMoodService::new(store))
    }

    #[test]
    fn test_log_today_by_default() {
        let (_temp, service) = service();

        let outcome = service.execute("4", None).unwrap();
        assert_eq!(outcome.entry.mood, Mood::Good);
        assert_eq!(outcome.entry.date, Local::now().date_naive());
        assert!(outcome.replaced.is_none());
    }

    #[test]
    fn test_log_by_label_for_yesterday() {
        let (_temp, service) = service();

        let outcome = service.execute("okay", Some("yesterday")).unwrap();
        assert_eq!(outcome.entry.mood, Mood::Okay);
        assert_eq!(
            outcome.entry.date,
            Local::now().date_naive() - Duration::days(1)
        );
    }

    #[test]
    fn test_relog_reports_replaced_mood() {
        let (_temp, service) = service();

        service.execute("2", None).unwrap();
        let outcome = service.execute("5", None).unwrap();

        assert_eq!(outcome.entry.mood, Mood::Amazing);
        assert_eq!(outcome.replaced, Some(Mood::NotGreat));
    }

    #[test]
    fn test_invalid_mood_rejected() {
        let (_temp, service) = service();

        match service.execute("6", None) {
            Err(MoodlogError::InvalidMood(_)) => {}
            other => panic!("Expected InvalidMood, got {:?}", other),
        }
    }

    #[test]
    fn test_future_date_rejected() {
        let (_temp, service) = service();

        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let ref_str = tomorrow.format("%Y-%m-%d").to_string();

        match service.execute("3", Some(&ref_str)) {
            Err(MoodlogError::FutureDate(date)) => assert_eq!(date, tomorrow),
            other => panic!("Expected FutureDate, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_time_reference_rejected() {
        let (_temp, service) = service();

        match service.execute("3", Some("someday")) {
            Err(MoodlogError::InvalidTimeReference(_)) => {}
            other => panic!("Expected InvalidTimeReference, got {:?}", other),
        }
    }
}
