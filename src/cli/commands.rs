//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record your mood for a day (default: today)
    Log {
        /// Mood score (1-5) or label (terrible, not-great, okay, good, amazing)
        mood: String,

        /// Day to log (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(value_name = "TIME_REF")]
        time_ref: Option<String>,
    },

    /// Show the entry for a day (default: today)
    Show {
        /// Day to show (e.g., today, yesterday, 2025-01-17)
        #[arg(value_name = "TIME_REF")]
        time_ref: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show aggregate statistics and streaks
    Stats,

    /// Show a month calendar of logged moods
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(value_name = "MONTH")]
        month: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
