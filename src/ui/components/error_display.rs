// SPDX-License-Identifier: MPL-2.0
//! Inline error block shown in place of tab content.
//!
//! Two kinds of failure end up here: input problems caught before any request
//! (no date, bad date) and failed fetches. Only the latter offer a retry.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title(i18n.tr("error-fetch-title"))
//!     .message("Failed to fetch: Not Found")
//!     .action(i18n.tr("action-retry"), Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// A request failed.
    #[default]
    Error,
    /// The user's input was rejected before any request.
    Warning,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ErrorSeverity::Error => "✕",
            ErrorSeverity::Warning => "!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            action: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a button (usually "Retry") emitting `message`.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.severity.color();

        let badge = Container::new(
            Text::new(self.severity.glyph())
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(accent.into()),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut content = Column::new().spacing(spacing::XS).width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(Text::new(label))
                    .on_press(message)
                    .style(button_styles::primary),
            );
        }

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .max_width(560.0)
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(palette.background.weak.color)),
                    border: iced::Border {
                        color: accent,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Error block centered in the available space.
pub fn centered<Message: Clone + 'static>(display: ErrorDisplay<Message>) -> Element<'static, Message> {
    Container::new(display.view())
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn builder_keeps_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Warning)
            .title("Cannot search")
            .message("Please select a date")
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.severity, ErrorSeverity::Warning);
        assert_eq!(display.message.as_deref(), Some("Please select a date"));
        assert_eq!(
            display.action,
            Some(("Retry".to_string(), TestMessage::Retry))
        );
        let _element = centered(display);
    }

    #[test]
    fn default_has_no_action() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
        assert!(display.action.is_none());
    }
}
