//! Show entry use case

use crate::domain::{MoodEntry, TimeReference};
use crate::error::Result;
use crate::infrastructure::{EntryStore, FileSystemStore};
use chrono::{Local, NaiveDate};

/// Service for looking up the entry of a single date
pub struct ShowEntryService {
    store: FileSystemStore,
}

impl ShowEntryService {
    /// Create a new show entry service
    pub fn new(store: FileSystemStore) -> Self {
        ShowEntryService { store }
    }

    /// Resolve the time reference (default today) and look up its entry.
    /// Absence is a normal outcome, not an error.
    pub fn execute(&self, time_ref_str: Option<&str>) -> Result<(NaiveDate, Option<MoodEntry>)> {
        let time_ref = match time_ref_str {
            Some(s) => TimeReference::parse(s)?,
            None => TimeReference::Today,
        };
        let date = time_ref.resolve(Local::now().date_naive());

        let entry = self.store.read_one(date)?;
        Ok((date, entry))
    }
}
