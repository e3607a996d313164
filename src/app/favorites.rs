// SPDX-License-Identifier: MPL-2.0
//! Favorites registry.
//!
//! An insertion-ordered list of [`PictureRecord`]s with no two entries
//! sharing a `date`. The whole list is written back to the preference store
//! after every mutation, overwriting the previous value.

use super::preferences::{self, PreferenceStore};
use crate::apod::PictureRecord;
use crate::error::Result;
use chrono::NaiveDate;

/// Preference key holding the JSON array of favorite records.
pub const FAVORITES_KEY: &str = "apod-favorites";

/// Result of [`FavoritesRegistry::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// Key of the confirmation toast.
    #[must_use]
    pub fn notification_key(self) -> &'static str {
        match self {
            ToggleOutcome::Added => "notification-favorite-added",
            ToggleOutcome::Removed => "notification-favorite-removed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesRegistry {
    records: Vec<PictureRecord>,
}

impl FavoritesRegistry {
    /// Loads the registry from `store`.
    ///
    /// A missing or malformed value gives an empty registry. Entries that
    /// repeat an earlier date are dropped.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let stored: Vec<PictureRecord> = preferences::load_or_default(store, FAVORITES_KEY);
        let mut registry = Self::default();
        for record in stored {
            if registry.is_favorite_date(record.date) {
                tracing::debug!(date = %record.date, "dropping duplicate favorite");
                continue;
            }
            registry.records.push(record);
        }
        tracing::debug!(count = registry.len(), "favorites loaded");
        registry
    }

    #[must_use]
    pub fn is_favorite(&self, record: &PictureRecord) -> bool {
        self.is_favorite_date(record.date)
    }

    #[must_use]
    pub fn is_favorite_date(&self, date: NaiveDate) -> bool {
        self.records.iter().any(|stored| stored.date == date)
    }

    /// Removes the entry sharing `record`'s date, or appends `record`, then
    /// persists the full list.
    ///
    /// The in-memory change is kept even when persisting fails; the returned
    /// error only reports that the store is now behind.
    pub fn toggle(
        &mut self,
        record: &PictureRecord,
        store: &mut dyn PreferenceStore,
    ) -> (ToggleOutcome, Result<()>) {
        let outcome = match self.records.iter().position(|r| r.same_entry(record)) {
            Some(index) => {
                self.records.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.records.push(record.clone());
                ToggleOutcome::Added
            }
        };
        tracing::debug!(date = %record.date, ?outcome, "favorite toggled");

        (outcome, self.save(store))
    }

    /// Writes the full list to `store`.
    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        preferences::store(store, FAVORITES_KEY, &self.records)
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn records(&self) -> &[PictureRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;
    use crate::app::preferences::{FileStore, MemoryStore};
    use serde_json::json;
    use tempfile::tempdir;

    fn record(date: &str) -> PictureRecord {
        PictureRecord {
            date: date.parse().unwrap(),
            title: format!("Picture {date}"),
            explanation: String::new(),
            media_type: MediaType::Image,
            url: format!("https://apod.example/{date}.jpg"),
            hdurl: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    fn dates(registry: &FavoritesRegistry) -> Vec<String> {
        registry.records().iter().map(|r| r.date.to_string()).collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = MemoryStore::new();
        let mut registry = FavoritesRegistry::load(&store);
        let r = record("2024-05-01");

        assert!(!registry.is_favorite(&r));
        let (outcome, saved) = registry.toggle(&r, &mut store);
        assert_eq!(outcome, ToggleOutcome::Added);
        assert!(saved.is_ok());
        assert!(registry.is_favorite(&r));

        let (outcome, _) = registry.toggle(&r, &mut store);
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert!(!registry.is_favorite(&r));
    }

    #[test]
    fn double_toggle_restores_original_sequence() {
        let mut store = MemoryStore::new();
        let mut registry = FavoritesRegistry::load(&store);
        for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            registry.toggle(&record(date), &mut store).1.unwrap();
        }
        let before = registry.clone();

        let middle = record("2024-01-02");
        registry.toggle(&middle, &mut store).1.unwrap();
        assert_eq!(dates(&registry), vec!["2024-01-01", "2024-01-03"]);
        registry.toggle(&middle, &mut store).1.unwrap();

        // Re-added entries go to the end; a fresh record round-trips exactly.
        let fresh = record("2024-02-01");
        let snapshot = registry.clone();
        registry.toggle(&fresh, &mut store).1.unwrap();
        registry.toggle(&fresh, &mut store).1.unwrap();
        assert_eq!(registry, snapshot);
        assert_eq!(registry.len(), before.len());
    }

    #[test]
    fn matching_is_by_date_only() {
        let mut store = MemoryStore::new();
        let mut registry = FavoritesRegistry::default();
        registry.toggle(&record("2024-03-03"), &mut store).1.unwrap();

        let mut renamed = record("2024-03-03");
        renamed.title = "Different title".into();
        assert!(registry.is_favorite(&renamed));

        let (outcome, _) = registry.toggle(&renamed, &mut store);
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert!(registry.is_empty());
    }

    #[test]
    fn removal_keeps_survivor_order() {
        let mut store = MemoryStore::new();
        let mut registry = FavoritesRegistry::default();
        for date in ["2024-01-05", "2024-01-01", "2024-01-03"] {
            registry.toggle(&record(date), &mut store).1.unwrap();
        }
        registry.toggle(&record("2024-01-01"), &mut store).1.unwrap();
        assert_eq!(dates(&registry), vec!["2024-01-05", "2024-01-03"]);
    }

    #[test]
    fn every_mutation_persists_full_list() {
        let mut store = MemoryStore::new();
        let mut registry = FavoritesRegistry::default();
        registry.toggle(&record("2024-01-01"), &mut store).1.unwrap();
        registry.toggle(&record("2024-01-02"), &mut store).1.unwrap();

        let stored = store.get(FAVORITES_KEY).unwrap();
        assert_eq!(stored.as_array().map(Vec::len), Some(2));
        assert_eq!(stored[1]["date"], json!("2024-01-02"));
    }

    #[test]
    fn reload_from_disk_reproduces_dates() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = FileStore::new(temp_dir.path());
        let mut registry = FavoritesRegistry::load(&store);
        for date in ["2023-12-24", "1995-06-16", "2020-02-29"] {
            registry.toggle(&record(date), &mut store).1.unwrap();
        }

        let reopened = FileStore::new(temp_dir.path());
        let reloaded = FavoritesRegistry::load(&reopened);
        assert_eq!(dates(&reloaded), dates(&registry));
    }

    #[test]
    fn reload_ignores_field_order() {
        let mut store = MemoryStore::new();
        store.insert(
            FAVORITES_KEY,
            json!([
                {"url": "https://a/1.jpg", "media_type": "image", "title": "One", "date": "2024-01-01"},
                {"title": "Two", "date": "2024-01-02", "explanation": "x", "url": "https://a/2.mp4", "media_type": "video"}
            ]),
        );
        let registry = FavoritesRegistry::load(&store);
        assert_eq!(dates(&registry), vec!["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn malformed_value_loads_empty() {
        let mut store = MemoryStore::new();
        store.insert(FAVORITES_KEY, json!("not a list"));
        assert!(FavoritesRegistry::load(&store).is_empty());
    }

    #[test]
    fn duplicate_dates_in_store_are_collapsed() {
        let mut store = MemoryStore::new();
        store.insert(
            FAVORITES_KEY,
            json!([
                {"date": "2024-01-01", "title": "First", "media_type": "image", "url": "u1"},
                {"date": "2024-01-01", "title": "Again", "media_type": "image", "url": "u2"}
            ]),
        );
        let registry = FavoritesRegistry::load(&store);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records()[0].title, "First");
    }

    #[test]
    fn failed_persist_keeps_memory_state() {
        let mut store = MemoryStore::read_only();
        let mut registry = FavoritesRegistry::default();
        let r = record("2024-04-04");

        let (outcome, saved) = registry.toggle(&r, &mut store);
        assert_eq!(outcome, ToggleOutcome::Added);
        assert!(saved.is_err());
        assert!(registry.is_favorite(&r));
    }
}
