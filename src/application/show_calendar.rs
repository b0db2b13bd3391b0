//! Show calendar use case

use crate::domain::MonthGrid;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, EntryStore, FileSystemStore};
use chrono::{Datelike, Local, NaiveDate};

/// Build the month grid for the requested month (default: current month).
pub fn show_calendar(
    store: &FileSystemStore,
    config: &Config,
    month: Option<&str>,
) -> Result<MonthGrid> {
    let first_of_month = match month {
        Some(s) => parse_month(s)?,
        None => {
            let today = Local::now().date_naive();
            today.with_day(1).unwrap_or(today)
        }
    };

    let entries = store.read_all()?;
    let moods = entries.into_iter().map(|e| (e.date, e.mood)).collect();

    Ok(MonthGrid::build(first_of_month, config.week_start, &moods))
}

/// Parse a YYYY-MM month reference to the first day of that month
fn parse_month(s: &str) -> Result<NaiveDate> {
    let date_str = format!("{}-01", s.trim());
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| MoodlogError::InvalidTimeReference(s.to_string()))
}
