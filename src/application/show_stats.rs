//! Show statistics use case

use crate::domain::{compute_stats, MoodStats};
use crate::error::Result;
use crate::infrastructure::{EntryStore, FileSystemStore};
use chrono::Local;

/// Read the full entry set and reduce it to a statistics snapshot.
/// The snapshot is recomputed on every call and never persisted.
pub fn show_stats(store: &FileSystemStore) -> Result<MoodStats> {
    let entries = store.read_all()?;
    compute_stats(&entries, Local::now().date_naive())
}
