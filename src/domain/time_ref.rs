//! Time reference parsing and resolution
//!
//! Mood logging is past-oriented: references resolve to today or earlier
//! weekdays, never forward. Future dates are only reachable through an
//! explicit `YYYY-MM-DD` and are rejected by the logging use case.

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-facing reference that can be resolved to a specific date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Today or the most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Specific date in the canonical YYYY-MM-DD form
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            _ if normalized.starts_with("last ") => parse_weekday(&normalized[5..])
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| {
                    MoodlogError::InvalidTimeReference(format!("last {}", &normalized[5..]))
                }),
            _ => {
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| MoodlogError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this time reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Weekday(target_day) => {
                find_recent_weekday(base_date, *target_day, false)
            }
            TimeReference::LastWeekday(target_day) => {
                find_recent_weekday(base_date, *target_day, true)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

fn parse_weekday(day_str: &str) -> Option<Weekday> {
    match day_str {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Find the most recent occurrence of a weekday on or before the base date.
/// With `strictly_before`, today resolves to the previous occurrence instead.
fn find_recent_weekday(base_date: NaiveDate, target_day: Weekday, strictly_before: bool) -> NaiveDate {
    let current_day = base_date.weekday();

    let days_back = (current_day.num_days_from_monday() + 7 - target_day.num_days_from_monday()) % 7;
    let days_back = if days_back == 0 && strictly_before {
        7
    } else {
        days_back
    };

    base_date - Duration::days(days_back as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(TimeReference::parse("today").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse("now").unwrap(), TimeReference::Today);
        assert_eq!(
            TimeReference::parse("yesterday").unwrap(),
            TimeReference::Yesterday
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            TimeReference::parse("monday").unwrap(),
            TimeReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("friday").unwrap(),
            TimeReference::Weekday(Weekday::Fri)
        );
    }

    #[test]
    fn test_parse_last_weekdays() {
        assert_eq!(
            TimeReference::parse("last monday").unwrap(),
            TimeReference::LastWeekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("last sunday").unwrap(),
            TimeReference::LastWeekday(Weekday::Sun)
        );
    }

    #[test]
    fn test_parse_specific_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(
            TimeReference::parse("2025-01-17").unwrap(),
            TimeReference::SpecificDate(expected)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeReference::parse("invalid").is_err());
        assert!(TimeReference::parse("2025-01-32").is_err()); // Invalid day
        assert!(TimeReference::parse("2025-13-01").is_err()); // Invalid month
        assert!(TimeReference::parse("17-01-2025").is_err()); // Wrong order
        assert!(TimeReference::parse("last invalidday").is_err());
        assert!(TimeReference::parse("tomorrow").is_err()); // No forward refs
        assert!(TimeReference::parse("next monday").is_err());
    }

    #[test]
    fn test_resolve_today_and_yesterday() {
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(TimeReference::Today.resolve(base), base);
        assert_eq!(
            TimeReference::Yesterday.resolve(base),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_resolve_weekday_same_day() {
        // Friday, Jan 17, 2025
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        // "friday" when today is Friday resolves to today
        assert_eq!(TimeReference::Weekday(Weekday::Fri).resolve(base), base);
    }

    #[test]
    fn test_resolve_weekday_past() {
        // Friday, Jan 17, 2025
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        // "monday" resolves to Monday, Jan 13
        let expected = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        assert_eq!(TimeReference::Weekday(Weekday::Mon).resolve(base), expected);
    }

    #[test]
    fn test_resolve_last_weekday_same_day() {
        // Friday, Jan 17, 2025
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        // "last friday" resolves to the previous Friday, Jan 10
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Fri).resolve(base),
            expected
        );
    }

    #[test]
    fn test_resolve_last_weekday_earlier_in_week() {
        // Tuesday, Feb 3, 2026
        let base = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        // "last friday" resolves to Friday, Jan 30, 2026
        let expected = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Fri).resolve(base),
            expected
        );
        // Plain "friday" resolves to the same most recent occurrence
        assert_eq!(TimeReference::Weekday(Weekday::Fri).resolve(base), expected);
    }

    #[test]
    fn test_resolve_specific_date() {
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let target = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(TimeReference::SpecificDate(target).resolve(base), target);
    }
}
