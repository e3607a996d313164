// SPDX-License-Identifier: MPL-2.0
//! Recent tab: a tile grid of the last N pictures.

use crate::apod::{FetchState, Fetcher, PictureRecord, PreviewCache, RecentCount, RequestId};
use crate::app::favorites::FavoritesRegistry;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{self, ErrorDisplay, ErrorSeverity};
use crate::ui::components::picture_card::{self, Action, CardContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Default)]
pub struct State {
    count: RecentCount,
    fetch: Fetcher<Vec<PictureRecord>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CountSelected(RecentCount),
    Retry,
    Fetched(RequestId, Result<Vec<PictureRecord>, Error>),
    Card(Action),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Fetch(RequestId, RecentCount),
    Loaded(Vec<PictureRecord>),
    Card(Action),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
    pub favorites: &'a FavoritesRegistry,
    pub spinner_rotation: f32,
    pub accent: Color,
}

impl State {
    #[must_use]
    pub fn new(count: RecentCount) -> Self {
        Self {
            count,
            fetch: Fetcher::new(),
        }
    }

    #[must_use]
    pub fn count(&self) -> RecentCount {
        self.count
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<Vec<PictureRecord>> {
        self.fetch.state()
    }

    /// Loads the gallery the first time the tab is shown, or after a failure.
    pub fn activate(&mut self) -> Event {
        if self.fetch.needs_load() {
            self.start()
        } else {
            Event::None
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CountSelected(count) => {
                if count == self.count && !self.fetch.needs_load() {
                    return Event::None;
                }
                self.count = count;
                self.start()
            }
            Message::Retry => self.start(),
            Message::Fetched(id, result) => {
                if self.fetch.finish(id, result) {
                    if let Some(records) = self.fetch.state().loaded() {
                        tracing::debug!(count = records.len(), "recent gallery loaded");
                        return Event::Loaded(records.clone());
                    }
                }
                Event::None
            }
            Message::Card(action) => Event::Card(action),
        }
    }

    fn start(&mut self) -> Event {
        Event::Fetch(self.fetch.begin(), self.count)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let header = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("recent-title")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("recent-subtitle")).size(typography::BODY));

        let chooser = RecentCount::ALL.iter().fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(i18n.tr("recent-count-label"))),
            |row, &count| {
                row.push(
                    button(Text::new(count.to_string()))
                        .on_press(Message::CountSelected(count))
                        .style(styles::button::tab(count == self.count)),
                )
            },
        );

        let content: Element<'a, Message> = match self.fetch.state() {
            FetchState::Idle | FetchState::Loading => animated_spinner::loading(
                i18n.tr("recent-loading"),
                ctx.accent,
                ctx.spinner_rotation,
            ),
            FetchState::Failed(message) => error_display::centered(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(i18n.tr("error-fetch-title"))
                    .message(message.clone())
                    .action(i18n.tr("action-retry"), Message::Retry),
            ),
            FetchState::Loaded(records) if records.is_empty() => {
                Container::new(Text::new(i18n.tr("recent-empty")).size(typography::TITLE_SM))
                    .width(Length::Fill)
                    .padding(spacing::XL)
                    .align_x(alignment::Horizontal::Center)
                    .into()
            }
            FetchState::Loaded(records) => {
                let tiles = records
                    .iter()
                    .map(|record| {
                        picture_card::tile(CardContext {
                            i18n,
                            record,
                            preview: record.preview_url().and_then(|url| ctx.previews.peek(url)),
                            is_favorite: ctx.favorites.is_favorite(record),
                        })
                        .map(Message::Card)
                    })
                    .collect();
                Column::new()
                    .spacing(spacing::MD)
                    .align_x(alignment::Horizontal::Center)
                    .push(picture_card::grid(tiles))
                    .push(
                        Text::new(i18n.tr_count("recent-summary", records.len()))
                            .size(typography::CAPTION),
                    )
                    .into()
            }
        };

        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(chooser)
            .push(content)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;

    fn records(n: u32) -> Vec<PictureRecord> {
        (1..=n)
            .map(|day| PictureRecord {
                date: chrono::NaiveDate::from_ymd_opt(2026, 9, day).unwrap(),
                title: format!("Picture {day}"),
                explanation: String::new(),
                media_type: MediaType::Image,
                url: format!("https://apod.example/{day}.jpg"),
                hdurl: None,
                thumbnail_url: None,
                copyright: None,
            })
            .collect()
    }

    #[test]
    fn default_count_is_ten() {
        assert_eq!(State::default().count(), RecentCount::Ten);
    }

    #[test]
    fn activation_requests_current_count_once() {
        let mut state = State::new(RecentCount::Twenty);
        let Event::Fetch(id, count) = state.activate() else {
            panic!("first activation must fetch");
        };
        assert_eq!(count, RecentCount::Twenty);
        state.update(Message::Fetched(id, Ok(records(20))));
        assert!(matches!(state.activate(), Event::None));
    }

    #[test]
    fn changing_count_refetches() {
        let mut state = State::default();
        let Event::Fetch(first, _) = state.activate() else {
            panic!("expected fetch");
        };
        state.update(Message::Fetched(first, Ok(records(10))));

        let Event::Fetch(_, count) = state.update(Message::CountSelected(RecentCount::Five)) else {
            panic!("count change must fetch");
        };
        assert_eq!(count, RecentCount::Five);
        assert_eq!(state.count(), RecentCount::Five);
        assert!(state.state().is_loading());
    }

    #[test]
    fn reselecting_loaded_count_does_nothing() {
        let mut state = State::default();
        let Event::Fetch(id, _) = state.activate() else {
            panic!("expected fetch");
        };
        state.update(Message::Fetched(id, Ok(records(10))));
        assert!(matches!(
            state.update(Message::CountSelected(RecentCount::Ten)),
            Event::None
        ));
    }

    #[test]
    fn response_for_previous_count_is_dropped() {
        let mut state = State::default();
        let Event::Fetch(ten, _) = state.activate() else {
            panic!("expected fetch");
        };
        let Event::Fetch(thirty, _) = state.update(Message::CountSelected(RecentCount::Thirty)) else {
            panic!("expected fetch");
        };

        assert!(matches!(
            state.update(Message::Fetched(ten, Ok(records(10)))),
            Event::None
        ));
        assert!(state.state().is_loading());

        let Event::Loaded(loaded) = state.update(Message::Fetched(thirty, Ok(records(30)))) else {
            panic!("fresh response must load");
        };
        assert_eq!(loaded.len(), 30);
    }

    #[test]
    fn view_renders_empty_and_filled() {
        let i18n = I18n::default();
        let previews = PreviewCache::default();
        let favorites = FavoritesRegistry::default();
        let ctx = || ViewContext {
            i18n: &i18n,
            previews: &previews,
            favorites: &favorites,
            spinner_rotation: 0.0,
            accent: Color::WHITE,
        };

        for batch in [Vec::new(), records(5)] {
            let mut state = State::default();
            let Event::Fetch(id, _) = state.activate() else {
                panic!("expected fetch");
            };
            state.update(Message::Fetched(id, Ok(batch)));
            drop(state.view(ctx()));
        }
    }
}
