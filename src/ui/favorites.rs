// SPDX-License-Identifier: MPL-2.0
//! Favorites tab.
//!
//! Renders the registry as stored: no request is involved, so there is no
//! loading or error state.

use crate::apod::PreviewCache;
use crate::app::favorites::FavoritesRegistry;
use crate::i18n::fluent::I18n;
use crate::ui::components::picture_card::{self, Action, CardContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
    pub favorites: &'a FavoritesRegistry,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Action> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(format!("⭐ {}", i18n.tr("favorites-title"))).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr_count("favorites-count", ctx.favorites.len()))
                .size(typography::BODY),
        );

    if ctx.favorites.is_empty() {
        let empty = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("☆").size(sizing::ICON_XL))
            .push(Text::new(i18n.tr("favorites-empty-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("favorites-empty-hint")).size(typography::BODY_SM));

        return Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(
                Container::new(empty)
                    .padding(spacing::XL)
                    .style(styles::container::panel),
            )
            .into();
    }

    let tiles = ctx
        .favorites
        .records()
        .iter()
        .map(|record| {
            picture_card::tile(CardContext {
                i18n,
                record,
                preview: record.preview_url().and_then(|url| ctx.previews.peek(url)),
                is_favorite: true,
            })
        })
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(picture_card::grid(tiles))
        .push(Text::new(i18n.tr("favorites-hint")).size(typography::CAPTION))
        .into()
}
