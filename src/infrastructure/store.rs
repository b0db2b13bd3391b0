//! File system entry store

use crate::domain::MoodEntry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable keyed storage of one mood entry per calendar date
///
/// Implementations must enforce the upsert-by-date invariant: a write for
/// an already-present date replaces the entry, and duplicate dates are
/// never observable through reads. Storage failures surface as errors —
/// an empty successful read and a failed read are distinct outcomes.
pub trait EntryStore {
    /// Insert or replace the entry for its date; visible to subsequent reads
    fn upsert(&self, entry: &MoodEntry) -> Result<()>;

    /// The complete current entry set, ascending by date
    fn read_all(&self) -> Result<Vec<MoodEntry>>;

    /// Entry for an exact date; absence is not an error
    fn read_one(&self, date: NaiveDate) -> Result<Option<MoodEntry>>;
}

/// On-disk document shape of .moodlog/entries.toml
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct EntriesDocument {
    #[serde(default)]
    entries: Vec<MoodEntry>,
}

/// File system implementation of EntryStore
///
/// Entries live in `.moodlog/entries.toml` under the journal root as an
/// array of tables, kept sorted ascending by date.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given journal root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the journal root
    /// First checks the MOODLOG_ROOT environment variable, then falls back
    /// to walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .moodlog
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    /// Check if this journal has been initialized
    pub fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    /// Create the .moodlog directory structure
    pub fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }

    /// Load configuration from .moodlog/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .moodlog/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join(".moodlog").join("entries.toml")
    }

    /// Load the entry set keyed by date.
    ///
    /// A missing entries file in an initialized journal is an empty set,
    /// never an error. Duplicate dates in a hand-edited file collapse
    /// last-write-wins, matching the upsert invariant.
    fn load_entries(&self) -> Result<BTreeMap<NaiveDate, MoodEntry>> {
        if !self.is_initialized() {
            return Err(MoodlogError::NotMoodlogDirectory(self.root.clone()));
        }

        let path = self.entries_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&path).map_err(MoodlogError::Io)?;
        let document: EntriesDocument = toml::from_str(&contents)?;

        let mut entries = BTreeMap::new();
        for entry in document.entries {
            entries.insert(entry.date, entry);
        }
        Ok(entries)
    }

    /// Write the entry set using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn save_entries(&self, entries: &BTreeMap<NaiveDate, MoodEntry>) -> Result<()> {
        let path = self.entries_path();

        let document = EntriesDocument {
            entries: entries.values().cloned().collect(),
        };
        let contents = toml::to_string_pretty(&document)?;

        let tmp_path = path.with_file_name(format!(
            "entries.toml.moodlog-tmp-{}",
            std::process::id()
        ));

        fs::write(&tmp_path, contents)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl EntryStore for FileSystemStore {
    fn upsert(&self, entry: &MoodEntry) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(entry.date, entry.clone());
        self.save_entries(&entries)
    }

    fn read_all(&self) -> Result<Vec<MoodEntry>> {
        let entries = self.load_entries()?;
        Ok(entries.into_values().collect())
    }

    fn read_one(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        let entries = self.load_entries()?;
        Ok(entries.get(&date).cloned())
    }
}
