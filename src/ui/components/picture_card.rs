// SPDX-License-Identifier: MPL-2.0
//! One APOD record, rendered either as a full card (Today, Pick a Date) or
//! as a compact gallery tile (Recent, Favorites).
//!
//! Cards emit [`Action`]s; each tab wraps them in its own message.

use crate::apod::{Preview, PictureRecord, APOD_WEBSITE};
use crate::config::GALLERY_COLUMNS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// User intent on a card.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowDetails(PictureRecord),
    ToggleFavorite(PictureRecord),
    /// Open a URL in the system browser.
    OpenInBrowser(String),
}

pub struct CardContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a PictureRecord,
    pub preview: Option<&'a Preview>,
    pub is_favorite: bool,
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.base.text.scale_alpha(0.7)),
    }
}

fn placeholder<'a>(content: Element<'a, Action>, height: f32) -> Element<'a, Action> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::SM)
        .style(styles::container::media_placeholder)
        .into()
}

/// Image preview, or a placeholder while it loads, after it failed, or for
/// videos without a thumbnail.
pub fn media<'a>(
    i18n: &I18n,
    record: &PictureRecord,
    preview: Option<&Preview>,
    height: f32,
) -> Element<'a, Action> {
    if record.preview_url().is_none() {
        let label = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("▶").size(sizing::ICON_XL))
            .push(Text::new(i18n.tr("media-video-placeholder")).size(typography::BODY_SM));
        return placeholder(label.into(), height);
    }

    match preview {
        Some(Preview::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Preview::Failed(reason)) => placeholder(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("media-preview-failed")).size(typography::BODY_SM))
                .push(Text::new(reason.clone()).size(typography::CAPTION).style(secondary_text))
                .into(),
            height,
        ),
        Some(Preview::Loading) | None => placeholder(
            Text::new(i18n.tr("media-preview-loading"))
                .size(typography::BODY_SM)
                .style(secondary_text)
                .into(),
            height,
        ),
    }
}

/// Star toggle with a text label.
pub fn favorite_button<'a>(i18n: &I18n, record: &PictureRecord, is_favorite: bool) -> Element<'a, Action> {
    let label = if is_favorite {
        format!("★ {}", i18n.tr("action-favorite-remove"))
    } else {
        format!("☆ {}", i18n.tr("action-favorite-add"))
    };
    button(Text::new(label))
        .on_press(Action::ToggleFavorite(record.clone()))
        .style(styles::button::favorite(is_favorite))
        .into()
}

/// Action opening the record's media in the browser. Images open
/// `image_url`; videos always open the video page.
pub fn open_media_button<'a>(
    i18n: &I18n,
    record: &PictureRecord,
    label_key: &str,
    image_url: &str,
) -> Element<'a, Action> {
    let (label, url) = if record.is_video() {
        (i18n.tr("action-watch-video"), record.url.clone())
    } else {
        (i18n.tr(label_key), image_url.to_string())
    };
    button(Text::new(label))
        .on_press(Action::OpenInBrowser(url))
        .style(styles::button::primary)
        .into()
}

pub fn apod_website_button<'a>(i18n: &I18n) -> Element<'a, Action> {
    button(Text::new(i18n.tr("action-apod-website")))
        .on_press(Action::OpenInBrowser(APOD_WEBSITE.to_string()))
        .style(styles::button::secondary)
        .into()
}

/// Title, long date and copyright.
pub fn heading<'a>(record: &PictureRecord, title_size: f32) -> Element<'a, Action> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.title.clone()).size(title_size))
        .push(
            Text::new(format!("📅 {}", record.long_date()))
                .size(typography::BODY_SM)
                .style(secondary_text),
        );
    if let Some(copyright) = &record.copyright {
        column = column.push(
            Text::new(format!("© {copyright}"))
                .size(typography::CAPTION)
                .style(secondary_text),
        );
    }
    column.into()
}

/// Full card: media, heading, explanation and actions.
pub fn hero<'a>(ctx: CardContext<'_>) -> Element<'a, Action> {
    let CardContext {
        i18n,
        record,
        preview,
        is_favorite,
    } = ctx;

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(open_media_button(
            i18n,
            record,
            "action-view-full",
            record.full_resolution_url(),
        ))
        .push(
            button(Text::new(i18n.tr("action-view-details")))
                .on_press(Action::ShowDetails(record.clone()))
                .style(styles::button::secondary),
        )
        .push(apod_website_button(i18n))
        .push(favorite_button(i18n, record, is_favorite));

    let body = Column::new()
        .spacing(spacing::MD)
        .push(media(i18n, record, preview, sizing::HERO_IMAGE_HEIGHT))
        .push(heading(record, typography::TITLE_MD))
        .push(Text::new(record.explanation.clone()).size(typography::BODY))
        .push(actions);

    Container::new(body)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::card)
        .into()
}

/// Gallery tile. Clicking anywhere but the star opens the detail view.
pub fn tile<'a>(ctx: CardContext<'_>) -> Element<'a, Action> {
    let CardContext {
        i18n,
        record,
        preview,
        is_favorite,
    } = ctx;

    let star = button(Text::new(if is_favorite { "★" } else { "☆" }).size(typography::TITLE_SM))
        .on_press(Action::ToggleFavorite(record.clone()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::favorite(is_favorite));

    let footer = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .width(Length::Fill)
                .push(Text::new(record.title.clone()).size(typography::TITLE_SM))
                .push(
                    Text::new(record.date.format("%Y-%m-%d").to_string())
                        .size(typography::CAPTION)
                        .color(palette::SPACE_400),
                ),
        )
        .push(star);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(media(i18n, record, preview, sizing::TILE_IMAGE_HEIGHT))
        .push(footer);

    button(Container::new(content).padding(spacing::XS).style(styles::container::card))
        .on_press(Action::ShowDetails(record.clone()))
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .padding(0)
        .style(styles::button::card)
        .into()
}

/// Lays tiles out in rows of [`GALLERY_COLUMNS`].
pub fn grid<'a, Message: 'a>(tiles: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;

    for tile in tiles {
        row = row.push(tile);
        in_row += 1;
        if in_row == GALLERY_COLUMNS {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(row);
    }

    rows.into()
}
