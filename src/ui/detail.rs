// SPDX-License-Identifier: MPL-2.0
//! Detail view for the selected record. Replaces the tab content until
//! closed.

use crate::apod::{PictureRecord, PreviewCache};
use crate::i18n::fluent::I18n;
use crate::ui::components::picture_card::{self, Action};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Card(Action),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a PictureRecord,
    pub previews: &'a PreviewCache,
    pub is_favorite: bool,
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .width(Length::Fixed(sizing::INPUT_WIDTH / 2.0)),
        )
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}

/// Target of the "View original" action: the record's own URL, never the
/// high-resolution variant.
fn original_url(record: &PictureRecord) -> &str {
    &record.url
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        i18n,
        record,
        previews,
        is_favorite,
    } = ctx;

    let back = button(Text::new(format!("← {}", i18n.tr("detail-back"))))
        .on_press(Message::Back)
        .style(styles::button::secondary);

    let preview = record.preview_url().and_then(|url| previews.peek(url));
    let media = picture_card::media(i18n, record, preview, sizing::HERO_IMAGE_HEIGHT).map(Message::Card);

    let kind = if record.is_video() {
        format!("🎬 {}", i18n.tr(record.media_type.i18n_key()))
    } else {
        format!("🖼️ {}", i18n.tr(record.media_type.i18n_key()))
    };

    let mut fields = Column::new()
        .spacing(spacing::XS)
        .push(field(i18n.tr("detail-date"), record.long_date()));
    if let Some(copyright) = &record.copyright {
        fields = fields.push(field(i18n.tr("detail-copyright"), copyright.clone()));
    }
    fields = fields.push(field(i18n.tr("detail-type"), kind));

    let actions = Element::from(
        Row::new()
            .spacing(spacing::SM)
            .push(picture_card::open_media_button(
                i18n,
                record,
                "action-view-original",
                original_url(record),
            ))
            .push(picture_card::apod_website_button(i18n))
            .push(picture_card::favorite_button(i18n, record, is_favorite)),
    )
    .map(Message::Card);

    let body = Column::new()
        .spacing(spacing::MD)
        .push(back)
        .push(media)
        .push(Text::new(record.title.clone()).size(typography::TITLE_LG))
        .push(fields)
        .push(Text::new(record.explanation.clone()).size(typography::BODY))
        .push(actions)
        .push(
            button(Text::new(i18n.tr("detail-back")))
                .on_press(Message::Back)
                .style(styles::button::primary),
        );

    Container::new(body)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Left)
        .style(styles::container::card)
        .into()
}
