// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::components::picture_card::Action;
use crate::ui::date_picker;
use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::today;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Today(today::Message),
    DatePicker(date_picker::Message),
    Gallery(gallery::Message),
    /// Card action from a favorites tile.
    Favorites(Action),
    Detail(detail::Message),
    /// Link in the attribution footer.
    Footer(Action),
    /// A preview download finished (`url`, bytes or error).
    PreviewLoaded(String, Result<Vec<u8>, Error>),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Spinner animation and toast expiry
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Backend base URL, overriding `[api] base_url` from `settings.toml`.
    pub api_url: Option<String>,
    /// Optional data directory override (preference store).
    /// Takes precedence over `APOD_EXPLORER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `APOD_EXPLORER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
