// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across tabs.
//!
//! - [`error_display`] - inline failure message with an optional retry action
//! - [`picture_card`] - one APOD record as a hero card or a gallery tile

pub mod error_display;
pub mod picture_card;
