//! Persistent settings and the key-value stores backing them.
//!
//! Only the high score survives a restart. It is stored as a decimal string
//! under [`HIGH_SCORE_KEY`]. A missing or broken store degrades to an
//! in-memory value; it never stops the game.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use whack_core::constants::HIGH_SCORE_KEY;
use whack_core::error::GameError;

/// String key-value store, in the spirit of browser `localStorage`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, GameError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file. Rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, or `None` if the file does not exist yet.
    fn read_text(&self) -> Result<Option<String>, GameError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| GameError::Store(format!("failed to read {}: {e}", self.path.display())))
    }

    fn parse(&self, json: &str) -> Result<BTreeMap<String, String>, GameError> {
        serde_json::from_str(json)
            .map_err(|e| GameError::Store(format!("failed to parse {}: {e}", self.path.display())))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, GameError> {
        match self.read_text()? {
            Some(json) => self.parse(&json),
            None => Ok(BTreeMap::new()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        // Unparsable contents are replaced; a file we cannot read is left alone.
        let mut entries = match self.read_text()? {
            Some(json) => self.parse(&json).unwrap_or_else(|e| {
                log::warn!("replacing unreadable store: {e}");
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| GameError::Store(format!("failed to create store directory: {e}")))?;
        }
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| GameError::Store(format!("failed to serialize store: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| GameError::Store(format!("failed to write {}: {e}", self.path.display())))
    }
}

/// Settings that outlive a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistentSettings {
    pub high_score: u32,
}

impl PersistentSettings {
    /// Read settings once at startup. Any failure yields a high score of 0.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let high_score = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|e| {
                log::warn!("ignoring unreadable high score {raw:?}: {e}");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("high score unavailable, starting from 0: {e}");
                0
            }
        };
        Self { high_score }
    }

    /// Record a final score. Returns true if it beat the high score, in which
    /// case the new value is written through to the store.
    pub fn record_score(&mut self, score: u32, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        if let Err(e) = store.set(HIGH_SCORE_KEY, &score.to_string()) {
            log::warn!("failed to persist high score {score}: {e}");
        }
        true
    }
}
