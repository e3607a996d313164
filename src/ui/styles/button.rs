// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

/// Main call to action (Search, Retry, View original).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::NEBULA_500)),
            text_color: WHITE,
            border: Border {
                color: palette::NEBULA_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::NEBULA_400)),
            text_color: WHITE,
            border: Border {
                color: palette::NEBULA_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Secondary actions (Back, APOD website, date stepping).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let (bg_color, text_color) = if is_light(theme) {
        (palette::SPACE_100, palette::SPACE_900)
    } else {
        (palette::SPACE_800, palette::SPACE_100)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::SPACE_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::NEBULA_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Grayed out, non-interactive.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light(theme) {
            palette::SPACE_200
        } else {
            palette::SPACE_700
        })),
        text_color: palette::SPACE_400,
        border: Border {
            color: palette::SPACE_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar tab and count chooser: highlighted when `active`.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return primary(theme, button::Status::Active);
        }

        let text_color = if is_light(theme) {
            palette::SPACE_900
        } else {
            palette::SPACE_100
        };
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: 0.15,
                ..palette::NEBULA_400
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Star toggle: gold when the record is a favorite.
pub fn favorite(is_favorite: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let mut style = secondary(theme, status);
        if is_favorite {
            style.text_color = palette::SPACE_950;
            style.background = Some(Background::Color(palette::STAR_GOLD));
            style.border.color = palette::STAR_GOLD;
        }
        style
    }
}

/// Borderless button wrapping a whole card or tile.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered);
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            color: if hovered {
                palette::NEBULA_400
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if hovered { shadow::MD } else { shadow::NONE },
        snap: true,
    }
}
