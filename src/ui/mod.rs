// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! tab owns its state, turns its `Message`s into `Event`s and leaves side
//! effects (requests, persistence, opening the browser) to the application.
//!
//! # Tabs
//!
//! - [`today`] - Picture of the day
//! - [`date_picker`] - Picture for a chosen date
//! - [`gallery`] - Recent pictures as a tile grid
//! - [`favorites`] - Saved pictures
//! - [`detail`] - Full view of the selected picture
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Picture cards and inline error display
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and color schemes
//! - [`navbar`] - Tab bar and theme toggle
//! - [`footer`] - Data attribution
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod date_picker;
pub mod design_tokens;
pub mod detail;
pub mod favorites;
pub mod footer;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod today;
pub mod widgets;
