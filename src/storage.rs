//! Typed key-value persistence against the local filesystem
//!
//! Each key lives in its own JSON file under the per-user config dir.
//! Reads fall back to a caller-supplied default and writes are dropped
//! on failure; persistence problems are logged, never surfaced.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::{error, warn};

use crate::constants::storage;

pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Storage rooted at the platform config dir
    pub fn new() -> Self {
        let mut root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push(storage::APP_DIR);
        Self { root }
    }

    /// Storage rooted at an explicit directory (`--data-dir`, tests)
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load the entry under `key`, or `default` when it is absent or
    /// does not parse. Corrupt state is never fatal.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!(key, error = ?err, "Failed to load entry, using default");
                default
            }
        }
    }

    /// Persist `value` under `key`. Write failures are logged and dropped;
    /// the in-memory state that triggered the save stays authoritative.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            error!(key, error = ?err, "Failed to save entry");
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create storage directory {}", self.root.display()))?;
        let path = self.entry_path(key);
        let json = serde_json::to_string_pretty(value).context("Failed to serialize entry")?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
