// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}

/// Slightly translucent surface derived from the theme background.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top bar holding the app name, tabs and theme toggle.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Raised card for a picture (today, date result, gallery tile, detail).
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Placeholder behind a preview that is loading, failed or is a video.
pub fn media_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).media_placeholder)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
