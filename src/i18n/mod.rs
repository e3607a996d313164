// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded in
//! the binary. The active locale is picked once at startup: `--lang`, then
//! `[general] language` in `settings.toml`, then the OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
