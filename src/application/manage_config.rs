//! Config management use case

use crate::domain::WeekStart;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemStore};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "week_start" => Ok(format!("{:?}", config.week_start).to_lowercase()),
            "emoji" => Ok(config.emoji.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: week_start, emoji, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "week_start" => {
                let week_start = WeekStart::from_str(value).map_err(MoodlogError::Config)?;
                config.week_start = week_start;
            }
            "emoji" => {
                let emoji = value.parse::<bool>().map_err(|_| {
                    MoodlogError::Config(format!(
                        "Invalid value for emoji: '{}'. Expected true or false",
                        value
                    ))
                })?;
                config.emoji = emoji;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: week_start, emoji",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
