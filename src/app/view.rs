// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top, the footer at the bottom; in between, the detail
//! view when a record is selected, otherwise the active tab. Toasts float
//! over everything.

use super::favorites::FavoritesRegistry;
use super::navigation::{Navigation, Tab};
use super::Message;
use crate::apod::{DateBounds, PreviewCache};
use crate::i18n::fluent::I18n;
use crate::ui::date_picker;
use crate::ui::design_tokens::spacing;
use crate::ui::detail;
use crate::ui::favorites;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::today;
use iced::{
    alignment,
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: &'a Navigation,
    pub today: &'a today::State,
    pub date_picker: &'a date_picker::State,
    pub gallery: &'a gallery::State,
    pub favorites: &'a FavoritesRegistry,
    pub previews: &'a PreviewCache,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
    pub spinner_rotation: f32,
    pub base_url: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active_tab: ctx.navigation.active_tab(),
        favorites_count: ctx.favorites.len(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let body = Container::new(view_body(&ctx))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    let column = Column::new()
        .push(navbar_view)
        .push(scrollable(body).height(Length::Fill))
        .push(footer::view(ctx.i18n).map(Message::Footer))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(column)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(record) = ctx.navigation.selected() {
        return detail::view(detail::ViewContext {
            i18n: ctx.i18n,
            record,
            previews: ctx.previews,
            is_favorite: ctx.favorites.is_favorite(record),
        })
        .map(Message::Detail);
    }

    let accent = ctx.theme_mode.colors().brand_primary;
    match ctx.navigation.active_tab() {
        Tab::Today => ctx
            .today
            .view(today::ViewContext {
                i18n: ctx.i18n,
                previews: ctx.previews,
                favorites: ctx.favorites,
                spinner_rotation: ctx.spinner_rotation,
                accent,
                base_url: ctx.base_url,
            })
            .map(Message::Today),
        Tab::DatePick => ctx
            .date_picker
            .view(date_picker::ViewContext {
                i18n: ctx.i18n,
                previews: ctx.previews,
                favorites: ctx.favorites,
                bounds: DateBounds::today(),
                spinner_rotation: ctx.spinner_rotation,
                accent,
            })
            .map(Message::DatePicker),
        Tab::Recent => ctx
            .gallery
            .view(gallery::ViewContext {
                i18n: ctx.i18n,
                previews: ctx.previews,
                favorites: ctx.favorites,
                spinner_rotation: ctx.spinner_rotation,
                accent,
            })
            .map(Message::Gallery),
        Tab::Favorites => favorites::view(favorites::ViewContext {
            i18n: ctx.i18n,
            previews: ctx.previews,
            favorites: ctx.favorites,
        })
        .map(Message::Favorites),
    }
}
