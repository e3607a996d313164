// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub favorite: Color,

    pub error: Color,

    /// Placeholder behind previews that have not arrived yet.
    pub media_placeholder: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SPACE_100,
            surface_raised: palette::WHITE,

            text_primary: palette::SPACE_900,
            text_secondary: palette::SPACE_700,

            brand_primary: palette::NEBULA_600,
            favorite: palette::STAR_GOLD,

            error: palette::ERROR_500,

            media_placeholder: palette::SPACE_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SPACE_950,
            surface_secondary: palette::SPACE_900,
            surface_raised: palette::SPACE_800,

            text_primary: palette::SPACE_100,
            text_secondary: palette::SPACE_400,

            brand_primary: palette::NEBULA_400,
            favorite: palette::STAR_GOLD,

            error: palette::ERROR_500,

            media_placeholder: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::SPACE_700
            },
        }
    }
}

/// Persisted light/dark preference. Serialized as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::Light => ColorScheme::light(),
        }
    }

    /// Iced theme applied to the window.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    /// Label key for the button that switches away from this mode.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            ThemeMode::Dark => "navbar-theme-light",
            ThemeMode::Light => "navbar-theme-dark",
        }
    }
}
