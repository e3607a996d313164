// SPDX-License-Identifier: MPL-2.0
//! Durable key/value preference store.
//!
//! Each key is an independent last-write-wins cell holding one JSON value.
//! There is no transactionality across keys.
//!
//! Reads never fail from the caller's point of view: a missing, unreadable or
//! non-JSON cell is reported as absent and the typed helpers fall back to the
//! type's default. Writes return an error so callers can surface it.
//!
//! # Storage Layout
//!
//! [`FileStore`] keeps one `<key>.json` file per key in the app data
//! directory (see [`paths::get_app_data_dir`]). A write goes to a sibling
//! temporary file first and is then renamed over the cell, so an interrupted
//! write leaves the previous value intact.

use super::paths;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Warning key shown when a preference cannot be written.
pub const SAVE_WARNING: &str = "notification-preferences-save-error";

/// Key/value persistence used for favorites and the theme.
pub trait PreferenceStore: fmt::Debug + Send {
    /// Returns the stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replaces the stored value for `key`.
    fn set(&mut self, key: &str, value: &Value) -> Result<()>;
}

/// Reads `key` as `T`, falling back to `T::default()` when the cell is absent
/// or does not match the expected shape.
pub fn load_or_default<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding malformed preference");
            T::default()
        }
    }
}

/// Serializes `value` and stores it under `key`.
pub fn store<T>(store: &mut dyn PreferenceStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    store.set(key, &value)
}

/// Preference store backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in `base_dir`, or the resolved app data directory.
    #[must_use]
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(Self::new)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn cell_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let path = self.cell_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read preference");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "preference is not valid JSON");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        let write = || -> Result<()> {
            fs::create_dir_all(&self.dir)?;
            let path = self.cell_path(key);
            let tmp = self.dir.join(format!(".{key}.json.tmp"));
            let content = serde_json::to_string_pretty(value)?;
            fs::write(&tmp, content)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        };

        write().map_err(|err| {
            tracing::error!(key, dir = %self.dir.display(), error = %err, "failed to write preference");
            Error::Preferences(format!("cannot store '{key}': {err}"))
        })
    }
}

/// In-memory preference store.
///
/// Used when no data directory can be resolved, and by tests. A read-only
/// store rejects every write, which lets callers exercise their failure path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cells: HashMap<String, Value>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            cells: HashMap::new(),
            read_only: true,
        }
    }

    /// Seeds a cell directly, bypassing the read-only flag.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.cells.insert(key.into(), value);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.cells.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        if self.read_only {
            return Err(Error::Preferences(format!(
                "cannot store '{key}': store is read-only"
            )));
        }
        self.cells.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Opens the preference store used by the running application.
///
/// Falls back to a session-only [`MemoryStore`] when no data directory is
/// available, so the app still runs without persistence.
pub fn open(base_dir: Option<PathBuf>) -> Box<dyn PreferenceStore> {
    match FileStore::open_with_override(base_dir) {
        Some(store) => {
            tracing::debug!(dir = %store.dir().display(), "using file preference store");
            Box::new(store)
        }
        None => {
            tracing::warn!("no data directory available, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
