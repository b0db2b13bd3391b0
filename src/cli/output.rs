//! Output formatting utilities

use crate::domain::{MonthGrid, Mood, MoodEntry, MoodStats, WeekStart, MOOD_SCALE};
use chrono::{NaiveDate, Weekday};

const BAR_WIDTH: usize = 20;

/// Format one entry for display
pub fn format_entry_line(entry: &MoodEntry, use_emoji: bool) -> String {
    format!(
        "{}  {}",
        entry.date.format("%Y-%m-%d"),
        mood_with_score(entry.mood, use_emoji)
    )
}

/// Format a list of entries for display, one per line
pub fn format_entry_list(entries: &[MoodEntry], use_emoji: bool) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_line(entry, use_emoji));
        output.push('\n');
    }
    output
}

/// Format a single-date lookup result
pub fn format_show(date: NaiveDate, entry: Option<&MoodEntry>, use_emoji: bool) -> String {
    match entry {
        Some(entry) => format_entry_line(entry, use_emoji),
        None => format!("No mood logged for {}", date.format("%Y-%m-%d")),
    }
}

/// Format the statistics snapshot
pub fn format_stats(stats: &MoodStats, use_emoji: bool) -> String {
    if stats.total_entries == 0 {
        return "No data yet. Log your first mood with 'moodlog log <1-5>'".to_string();
    }

    let mut output = format!(
        "Insights from {}\n\n\
        Average mood:   {:.1}/5\n\
        Current streak: {}\n\
        Longest streak: {}\n",
        pluralize(stats.total_entries, "entry", "entries"),
        stats.average_mood,
        pluralize(stats.current_streak as usize, "day", "days"),
        pluralize(stats.longest_streak as usize, "day", "days"),
    );

    output.push_str("\nMood breakdown:\n");
    let max_count = stats
        .mood_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);

    // Sparse: only moods that occur appear
    for (mood, count) in &stats.mood_distribution {
        let percentage = *count as f64 / stats.total_entries as f64 * 100.0;
        let bar_len = (*count * BAR_WIDTH).div_ceil(max_count);
        output.push_str(&format!(
            "{:<12} {:>4}  {:>5.1}%  {}\n",
            mood_cell(*mood, use_emoji),
            count,
            percentage,
            "#".repeat(bar_len)
        ));
    }

    output
}

/// Format the month calendar grid.
///
/// Each week is a line of day numbers; weeks with logged days get a marks
/// line underneath showing the mood for each logged day and a dot for the
/// rest.
pub fn format_calendar(grid: &MonthGrid, use_emoji: bool) -> String {
    let mut output = String::new();

    let title = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", grid.year, grid.month));
    output.push_str(&format!("{:^28}\n", title));

    for column in 0..7 {
        let weekday = grid.week_start.weekday_at(column);
        output.push_str(&format!("{:>4}", weekday_abbrev(weekday)));
    }
    output.push('\n');

    for week in &grid.weeks {
        for cell in week {
            match cell {
                Some(cell) => output.push_str(&format!("{:>4}", cell.day)),
                None => output.push_str("    "),
            }
        }
        output.push('\n');

        if week.iter().flatten().any(|cell| cell.mood.is_some()) {
            for cell in week {
                let mark = match cell {
                    Some(cell) => match cell.mood {
                        Some(mood) => mood_glyph(mood, use_emoji),
                        None => ".".to_string(),
                    },
                    None => String::new(),
                };
                output.push_str(&format!("{:>4}", mark));
            }
            output.push('\n');
        }
    }

    output
}

/// Format the five-point mood scale legend
pub fn format_mood_scale(use_emoji: bool) -> String {
    let mut output = String::from("Mood scale:");
    for mood in MOOD_SCALE {
        if use_emoji {
            output.push_str(&format!("  {} {} {}", mood.score(), mood.emoji(), mood.label()));
        } else {
            output.push_str(&format!("  {} {}", mood.score(), mood.label()));
        }
    }
    output
}

fn mood_with_score(mood: Mood, use_emoji: bool) -> String {
    if use_emoji {
        format!("{} {} ({}/5)", mood.emoji(), mood.label(), mood.score())
    } else {
        format!("{} ({}/5)", mood.label(), mood.score())
    }
}

fn mood_cell(mood: Mood, use_emoji: bool) -> String {
    if use_emoji {
        format!("{} {}", mood.emoji(), mood.label())
    } else {
        mood.label().to_string()
    }
}

fn mood_glyph(mood: Mood, use_emoji: bool) -> String {
    if use_emoji {
        mood.emoji().to_string()
    } else {
        mood.score().to_string()
    }
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_stats;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(date_str: &str, mood: Mood) -> MoodEntry {
        MoodEntry::new(date(date_str), mood, Utc::now())
    }

    #[test]
    fn test_format_entry_line() {
        let line = format_entry_line(&entry("2025-01-17", Mood::Good), true);
        assert_eq!(line, "2025-01-17  😊 Good (4/5)");

        let plain = format_entry_line(&entry("2025-01-17", Mood::Good), false);
        assert_eq!(plain, "2025-01-17  Good (4/5)");
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], true), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            entry("2025-01-17", Mood::Good),
            entry("2025-01-16", Mood::Okay),
        ];
        let output = format_entry_list(&entries, false);
        assert!(output.contains("2025-01-17  Good (4/5)"));
        assert!(output.contains("2025-01-16  Okay (3/5)"));
    }

    #[test]
    fn test_format_show_miss() {
        let output = format_show(date("2025-01-17"), None, true);
        assert_eq!(output, "No mood logged for 2025-01-17");
    }

    #[test]
    fn test_format_stats_empty() {
        let stats = MoodStats::default();
        let output = format_stats(&stats, true);
        assert!(output.contains("No data yet"));
        assert!(output.contains("moodlog log"));
    }

    #[test]
    fn test_format_stats_block() {
        let entries = vec![
            entry("2024-01-01", Mood::Okay),
            entry("2024-01-02", Mood::Amazing),
            entry("2024-01-03", Mood::Amazing),
        ];
        let stats = compute_stats(&entries, date("2024-06-01")).unwrap();
        let output = format_stats(&stats, false);

        assert!(output.contains("Insights from 3 entries"));
        assert!(output.contains("Average mood:   4.3/5"));
        assert!(output.contains("Current streak: 0 days"));
        assert!(output.contains("Longest streak: 3 days"));
        assert!(output.contains("Okay"));
        assert!(output.contains("33.3%"));
        assert!(output.contains("66.7%"));
        // Sparse breakdown: absent moods don't appear
        assert!(!output.contains("Terrible"));
    }

    #[test]
    fn test_format_stats_pluralizes_single_entry() {
        let entries = vec![entry("2024-01-01", Mood::Good)];
        let stats = compute_stats(&entries, date("2024-01-01")).unwrap();
        let output = format_stats(&stats, false);

        assert!(output.contains("Insights from 1 entry"));
        assert!(output.contains("Current streak: 1 day\n"));
    }

    #[test]
    fn test_format_calendar_headers() {
        let grid = MonthGrid::build(date("2025-08-01"), WeekStart::Monday, &BTreeMap::new());
        let output = format_calendar(&grid, true);

        assert!(output.contains("August 2025"));
        let header_line = output.lines().nth(1).unwrap();
        assert!(header_line.starts_with("  Mo"));
        assert!(header_line.ends_with("Su"));
        assert!(output.contains("31"));
    }

    #[test]
    fn test_format_calendar_sunday_start() {
        let grid = MonthGrid::build(date("2025-08-01"), WeekStart::Sunday, &BTreeMap::new());
        let output = format_calendar(&grid, true);

        let header_line = output.lines().nth(1).unwrap();
        assert!(header_line.starts_with("  Su"));
        assert!(header_line.ends_with("Sa"));
    }

    #[test]
    fn test_format_calendar_marks_logged_days() {
        let mut moods = BTreeMap::new();
        moods.insert(date("2025-08-08"), Mood::Amazing);
        let grid = MonthGrid::build(date("2025-08-01"), WeekStart::Monday, &moods);

        let with_emoji = format_calendar(&grid, true);
        assert!(with_emoji.contains(Mood::Amazing.emoji()));

        let plain = format_calendar(&grid, false);
        assert!(plain.contains('5'));
        // Unlogged days in a marked week show a dot
        assert!(plain.contains('.'));
    }

    #[test]
    fn test_format_calendar_no_marks_without_entries() {
        let grid = MonthGrid::build(date("2025-08-01"), WeekStart::Monday, &BTreeMap::new());
        let output = format_calendar(&grid, true);
        assert!(!output.contains('.'));
    }

    #[test]
    fn test_format_mood_scale() {
        let output = format_mood_scale(true);
        for mood in MOOD_SCALE {
            assert!(output.contains(mood.label()));
            assert!(output.contains(mood.emoji()));
        }

        let plain = format_mood_scale(false);
        assert!(plain.contains("1 Terrible"));
        assert!(plain.contains("5 Amazing"));
        assert!(!plain.contains(Mood::Okay.emoji()));
    }
}
