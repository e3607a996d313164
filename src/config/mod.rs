// SPDX-License-Identifier: MPL-2.0
//! Startup configuration stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[api]` - backend base URL
//! - `[gallery]` - initial size of the recent gallery
//!
//! User state that changes while the app runs (favorites, theme) is not
//! kept here; it lives in the preference store under the data directory.
//!
//! # Examples
//!
//! ```no_run
//! use apod_explorer::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::apod::RecentCount;
use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key pushed as a toast when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the APOD backend, without the `/api/apod` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Recent gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Initial number of recent pictures (5, 10, 20 or 30).
    #[serde(default = "default_recent_count", skip_serializing_if = "Option::is_none")]
    pub default_count: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_count: default_recent_count(),
        }
    }
}

fn default_recent_count() -> Option<u32> {
    Some(DEFAULT_RECENT_COUNT)
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Backend base URL, falling back to the built-in default.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Initial recent gallery size. Unsupported values fall back to the default.
    #[must_use]
    pub fn recent_count(&self) -> RecentCount {
        match self.gallery.default_count.map(RecentCount::try_from) {
            Some(Ok(count)) => count,
            Some(Err(reason)) => {
                tracing::warn!(%reason, "ignoring gallery.default_count");
                RecentCount::default()
            }
            None => RecentCount::default(),
        }
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://apod.internal:9000".to_string()),
            },
            gallery: GalleryConfig {
                default_count: Some(20),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.recent_count(), RecentCount::Twenty);
        assert_eq!(loaded.api_base_url(), "http://apod.internal:9000");
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[api\nbase_url = ").expect("write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), "http://localhost:8080");
        assert_eq!(config.recent_count(), RecentCount::Ten);
    }

    #[test]
    fn unsupported_gallery_count_falls_back() {
        let config: Config = toml::from_str("[gallery]\ndefault_count = 7\n").unwrap();
        assert_eq!(config.recent_count(), RecentCount::Ten);
    }

    #[test]
    fn blank_base_url_falls_back() {
        let config: Config = toml::from_str("[api]\nbase_url = \"  \"\n").unwrap();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
