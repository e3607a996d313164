// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Two directories matter:
//! - **data** - backs the preference store (favorites and theme cells)
//! - **config** - holds `settings.toml`
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to `*_with_override()` (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) via [`init_cli_overrides`]
//! 3. **Environment variables** (`APOD_EXPLORER_DATA_DIR`, `APOD_EXPLORER_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ApodExplorer";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "APOD_EXPLORER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "APOD_EXPLORER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which application directory is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn platform_default(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory (e.g. `~/.local/share/ApodExplorer/` on Linux).
pub fn get_app_data_dir() -> Option<PathBuf> {
    resolve(DirKind::Data, None)
}

/// Returns the data directory, honoring an explicit override first.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Returns the config directory (e.g. `~/.config/ApodExplorer/` on Linux).
pub fn get_app_config_dir() -> Option<PathBuf> {
    resolve(DirKind::Config, None)
}

/// Returns the config directory, honoring an explicit override first.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}
