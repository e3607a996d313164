// SPDX-License-Identifier: MPL-2.0
//! Theme preference persistence.

use super::preferences::{self, PreferenceStore};
use crate::error::Result;
use crate::ui::theming::ThemeMode;

/// Preference key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "apod-theme";

/// Loads the stored theme. Absent or malformed values yield dark.
pub fn load(store: &dyn PreferenceStore) -> ThemeMode {
    preferences::load_or_default(store, THEME_KEY)
}

pub fn save(store: &mut dyn PreferenceStore, mode: ThemeMode) -> Result<()> {
    preferences::store(store, THEME_KEY, &mode)
}

/// Flips `mode` and persists the new value.
///
/// The in-memory mode changes even when the write fails; the error is
/// returned so the caller can warn the user.
pub fn toggle(mode: &mut ThemeMode, store: &mut dyn PreferenceStore) -> Result<()> {
    *mode = mode.toggled();
    tracing::debug!(theme = ?mode, "theme toggled");
    save(store, *mode)
}
