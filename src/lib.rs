// SPDX-License-Identifier: MPL-2.0
//! `apod_explorer` is a desktop viewer for NASA's Astronomy Picture of the
//! Day built with the Iced GUI framework.
//!
//! It fetches pictures from an APOD backend (today, a chosen date, the most
//! recent ones), keeps a persistent list of favorites and a light/dark theme
//! preference, and is localized with Fluent.

pub mod apod;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
