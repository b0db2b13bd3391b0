//! Month-grid construction for the calendar view

use crate::domain::Mood;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// First weekday of a rendered calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Column index (0-6) of a weekday within a week starting here
    pub fn column_of(&self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
        }
    }

    /// Weekday occupying a column (0-6)
    pub fn weekday_at(&self, column: usize) -> Weekday {
        let monday_offset = match self {
            WeekStart::Monday => column,
            WeekStart::Sunday => (column + 6) % 7,
        };
        match monday_offset {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(format!(
                "Invalid week start: '{}'. Valid values are: monday, sunday",
                s
            )),
        }
    }
}

/// One in-month day cell: the day of month and its logged mood, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: u32,
    pub mood: Option<Mood>,
}

/// A month laid out as week rows of seven cells
///
/// Cells outside the month are `None`; every in-month day appears exactly
/// once, in the column of its weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    pub weeks: Vec<[Option<CalendarCell>; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `first_of_month`
    /// (callers pass day 1), marking days present in `moods`.
    pub fn build(
        first_of_month: NaiveDate,
        week_start: WeekStart,
        moods: &BTreeMap<NaiveDate, Mood>,
    ) -> Self {
        let year = first_of_month.year();
        let month = first_of_month.month();
        let day_count = days_in_month(first_of_month);

        let mut weeks = Vec::new();
        let mut week: [Option<CalendarCell>; 7] = [None; 7];

        for day in 1..=day_count {
            let date = first_of_month + Duration::days((day - 1) as i64);
            let column = week_start.column_of(date.weekday());

            week[column] = Some(CalendarCell {
                day,
                mood: moods.get(&date).copied(),
            });

            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }

        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        MonthGrid {
            year,
            month,
            week_start,
            weeks,
        }
    }
}

fn days_in_month(first_of_month: NaiveDate) -> u32 {
    let (year, month) = (first_of_month.year(), first_of_month.month());
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_month_first {
        Some(next) => (next - first_of_month).num_days() as u32,
        None => 31,
    }
}
