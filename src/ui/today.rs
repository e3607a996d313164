// SPDX-License-Identifier: MPL-2.0
//! Today tab: the picture of the day.

use crate::apod::{FetchState, Fetcher, PictureRecord, PreviewCache, RequestId};
use crate::app::favorites::FavoritesRegistry;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{self, ErrorDisplay, ErrorSeverity};
use crate::ui::components::picture_card::{self, Action, CardContext};
use crate::ui::widgets::animated_spinner;
use iced::{Color, Element};

#[derive(Debug, Default)]
pub struct State {
    fetch: Fetcher<PictureRecord>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Retry,
    Fetched(RequestId, Result<PictureRecord, Error>),
    Card(Action),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A request was started; the app runs it.
    Fetch(RequestId),
    Loaded(PictureRecord),
    Card(Action),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
    pub favorites: &'a FavoritesRegistry,
    pub spinner_rotation: f32,
    pub accent: Color,
    pub base_url: &'a str,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request if nothing is loaded yet or the last one failed.
    pub fn activate(&mut self) -> Event {
        if self.fetch.needs_load() {
            Event::Fetch(self.fetch.begin())
        } else {
            Event::None
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Retry => Event::Fetch(self.fetch.begin()),
            Message::Fetched(id, result) => {
                if self.fetch.finish(id, result) {
                    if let Some(record) = self.fetch.state().loaded() {
                        return Event::Loaded(record.clone());
                    }
                }
                Event::None
            }
            Message::Card(action) => Event::Card(action),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<PictureRecord> {
        self.fetch.state()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.fetch.state() {
            FetchState::Idle | FetchState::Loading => animated_spinner::loading(
                ctx.i18n.tr("today-loading"),
                ctx.accent,
                ctx.spinner_rotation,
            ),
            FetchState::Failed(message) => error_display::centered(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(ctx.i18n.tr("error-fetch-title"))
                    .message(format!(
                        "{message}\n{}",
                        ctx.i18n
                            .tr_with_args("error-backend-hint", &[("url", ctx.base_url)])
                    ))
                    .action(ctx.i18n.tr("action-retry"), Message::Retry),
            ),
            FetchState::Loaded(record) => picture_card::hero(CardContext {
                i18n: ctx.i18n,
                record,
                preview: record.preview_url().and_then(|url| ctx.previews.peek(url)),
                is_favorite: ctx.favorites.is_favorite(record),
            })
            .map(Message::Card),
        }
    }
}
