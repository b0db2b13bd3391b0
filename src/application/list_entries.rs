//! List entries use case

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::{EntryStore, FileSystemStore};
use chrono::NaiveDate;

/// List entries with optional date range and limit, newest first.
pub fn list_entries(
    store: &FileSystemStore,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<MoodEntry>> {
    let mut entries = store.read_all()?;

    if let Some(from_date) = from {
        entries.retain(|e| e.date >= from_date);
    }
    if let Some(to_date) = to {
        entries.retain(|e| e.date <= to_date);
    }

    // read_all is ascending; display wants newest first
    entries.reverse();

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
