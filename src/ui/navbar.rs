// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: app name, one button per tab and the theme toggle.

use crate::app::navigation::Tab;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Stays highlighted while a detail view is open.
    pub active_tab: Tab,
    pub favorites_count: usize,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectTab(Tab),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectTab(Tab),
    ToggleTheme,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::SelectTab(tab) => Event::SelectTab(tab),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

fn tab_label(ctx: &ViewContext<'_>, tab: Tab) -> String {
    let label = ctx.i18n.tr(tab.label_key());
    if tab == Tab::Favorites && ctx.favorites_count > 0 {
        format!("{label} ({})", ctx.favorites_count)
    } else {
        label
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = Tab::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &tab| {
        row.push(
            button(Text::new(tab_label(&ctx, tab)))
                .on_press(Message::SelectTab(tab))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::tab(tab == ctx.active_tab)),
        )
    });

    let theme_button = button(Text::new(ctx.i18n.tr(ctx.theme_mode.toggle_label_key())))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("🔭 {}", ctx.i18n.tr("app-name"))).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(tabs)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}
