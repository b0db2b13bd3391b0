//! moodlog - Terminal mood journal
//!
//! A command-line mood-journaling application: one mood rating per calendar
//! day, a month-calendar view, and aggregate statistics with streak tracking.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
