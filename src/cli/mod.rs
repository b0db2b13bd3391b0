//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_calendar, format_entry_line, format_entry_list, format_mood_scale, format_show,
    format_stats,
};
