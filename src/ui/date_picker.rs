// SPDX-License-Identifier: MPL-2.0
//! Pick a Date tab.
//!
//! The user types a `YYYY-MM-DD` date (or steps with the day buttons) and
//! searches. Input is validated before anything is sent: an empty field, an
//! unparsable date or a date outside the archive is reported inline and no
//! request is made.

use crate::apod::{DateBounds, FetchState, Fetcher, PictureRecord, PreviewCache, RequestId};
use crate::app::favorites::FavoritesRegistry;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{self, ErrorDisplay, ErrorSeverity};
use crate::ui::components::picture_card::{self, Action, CardContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner;
use chrono::{Days, NaiveDate};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a search was refused before any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInputError {
    Missing,
    InvalidFormat,
    OutOfRange,
}

impl DateInputError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            DateInputError::Missing => "error-date-missing",
            DateInputError::InvalidFormat => "error-date-format",
            DateInputError::OutOfRange => "error-date-out-of-range",
        }
    }
}

impl fmt::Display for DateInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInputError::Missing => write!(f, "Please select a date"),
            DateInputError::InvalidFormat => write!(f, "Enter the date as YYYY-MM-DD"),
            DateInputError::OutOfRange => write!(f, "Date is outside the APOD archive"),
        }
    }
}

/// Parses and range-checks the text field.
pub fn parse_date(input: &str, bounds: DateBounds) -> Result<NaiveDate, DateInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateInputError::Missing);
    }
    let date =
        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateInputError::InvalidFormat)?;
    if bounds.contains(date) {
        Ok(date)
    } else {
        Err(DateInputError::OutOfRange)
    }
}

#[derive(Debug, Default)]
pub struct State {
    input: String,
    input_error: Option<DateInputError>,
    last_query: Option<NaiveDate>,
    fetch: Fetcher<PictureRecord>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Search,
    PreviousDay,
    NextDay,
    Today,
    Retry,
    Fetched(RequestId, Result<PictureRecord, Error>),
    Card(Action),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A request for `date` was started; the app runs it.
    Fetch(RequestId, NaiveDate),
    Loaded(PictureRecord),
    Card(Action),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
    pub favorites: &'a FavoritesRegistry,
    pub bounds: DateBounds,
    pub spinner_rotation: f32,
    pub accent: Color,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn input_error(&self) -> Option<DateInputError> {
        self.input_error
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<PictureRecord> {
        self.fetch.state()
    }

    pub fn update(&mut self, message: Message, bounds: DateBounds) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Search => self.search(bounds),
            Message::PreviousDay => {
                self.step(bounds, |date| date.checked_sub_days(Days::new(1)));
                Event::None
            }
            Message::NextDay => {
                self.step(bounds, |date| date.checked_add_days(Days::new(1)));
                Event::None
            }
            Message::Today => {
                self.set_date(bounds.latest);
                Event::None
            }
            Message::Retry => match self.last_query {
                Some(date) => self.start(date),
                None => self.search(bounds),
            },
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

    fn search(&mut self, bounds: DateBounds) -> Event {
        match parse_date(&self.input, bounds) {
            Ok(date) => self.start(date),
            Err(err) => {
                tracing::debug!(input = %self.input, error = %err, "date search refused");
                self.input_error = Some(err);
                self.fetch.fail_without_request(err.to_string());
                Event::None
            }
        }
    }

    fn start(&mut self, date: NaiveDate) -> Event {
        self.input_error = None;
        self.last_query = Some(date);
        Event::Fetch(self.fetch.begin(), date)
    }

    fn step(&mut self, bounds: DateBounds, step: impl Fn(NaiveDate) -> Option<NaiveDate>) {
        let base = parse_date(&self.input, bounds).unwrap_or(bounds.latest);
        let next = step(base).map_or(base, |date| bounds.clamp(date));
        self.set_date(next);
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.input = date.format(DATE_FORMAT).to_string();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let loading = self.fetch.state().is_loading();

        let input = text_input(&i18n.tr("date-input-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Search)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let search = button(Text::new(i18n.tr("date-search-button")));
        let search = if loading {
            search.style(styles::button::disabled)
        } else {
            search.on_press(Message::Search).style(styles::button::primary)
        };

        let step_button = |label: String, message: Message| {
            button(Text::new(label))
                .on_press(message)
                .style(styles::button::secondary)
        };

        let controls = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("date-input-label")))
            .push(step_button("◀".into(), Message::PreviousDay))
            .push(input)
            .push(step_button("▶".into(), Message::NextDay))
            .push(step_button(i18n.tr("date-today-button"), Message::Today))
            .push(search);

        let earliest = ctx.bounds.earliest.format(DATE_FORMAT).to_string();
        let latest = ctx.bounds.latest.format(DATE_FORMAT).to_string();
        let range_args = [("earliest", earliest.as_str()), ("latest", latest.as_str())];

        let result: Element<'a, Message> = match (self.input_error, self.fetch.state()) {
            (Some(err), _) => {
                let message = i18n.tr_with_args(err.i18n_key(), &range_args);
                error_display::centered(
                    ErrorDisplay::new(ErrorSeverity::Warning)
                        .title(i18n.tr("error-date-title"))
                        .message(message),
                )
            }
            (None, FetchState::Idle) => Container::new(Text::new(i18n.tr("date-empty-hint")))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center)
                .into(),
            (None, FetchState::Loading) => {
                animated_spinner::loading(i18n.tr("date-loading"), ctx.accent, ctx.spinner_rotation)
            }
            (None, FetchState::Failed(message)) => error_display::centered(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(i18n.tr("error-fetch-title"))
                    .message(message.clone())
                    .action(i18n.tr("action-retry"), Message::Retry),
            ),
            (None, FetchState::Loaded(record)) => picture_card::hero(CardContext {
                i18n,
                record,
                preview: record.preview_url().and_then(|url| ctx.previews.peek(url)),
                is_favorite: ctx.favorites.is_favorite(record),
            })
            .map(Message::Card),
        };

        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(controls)
            .push(Text::new(i18n.tr_with_args("date-range-hint", &range_args)).size(typography::CAPTION))
            .push(result)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;

    fn bounds() -> DateBounds {
        DateBounds::ending(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn record(date: NaiveDate) -> PictureRecord {
        PictureRecord {
            date,
            title: "Saturn at opposition".into(),
            explanation: String::new(),
            media_type: MediaType::Image,
            url: "https://apod.example/saturn.jpg".into(),
            hdurl: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    #[test]
    fn search_without_date_reports_missing_input_and_sends_nothing() {
        let mut state = State::new();
        let event = state.update(Message::Search, bounds());

        assert!(matches!(event, Event::None));
        assert_eq!(state.input_error(), Some(DateInputError::Missing));
        assert_eq!(state.state().error(), Some("Please select a date"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(parse_date("   ", bounds()), Err(DateInputError::Missing));
    }

    #[test]
    fn malformed_date_is_refused() {
        let mut state = State::new();
        state.update(Message::InputChanged("18/10/2026".into()), bounds());
        assert!(matches!(state.update(Message::Search, bounds()), Event::None));
        assert_eq!(state.input_error(), Some(DateInputError::InvalidFormat));
    }

    #[test]
    fn dates_outside_archive_are_refused() {
        assert_eq!(parse_date("1995-06-15", bounds()), Err(DateInputError::OutOfRange));
        assert_eq!(parse_date("2026-10-19", bounds()), Err(DateInputError::OutOfRange));
        assert!(parse_date("1995-06-16", bounds()).is_ok());
    }

    #[test]
    fn valid_search_starts_request_and_loads() {
        let mut state = State::new();
        state.update(Message::InputChanged("2020-04-01".into()), bounds());
        let Event::Fetch(id, date) = state.update(Message::Search, bounds()) else {
            panic!("expected a request");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
        assert!(state.state().is_loading());
        assert!(state.input_error().is_none());

        let event = state.update(Message::Fetched(id, Ok(record(date))), bounds());
        assert!(matches!(event, Event::Loaded(_)));
    }

    #[test]
    fn retry_reuses_last_query_even_after_edit() {
        let mut state = State::new();
        state.update(Message::InputChanged("2020-04-01".into()), bounds());
        let Event::Fetch(id, _) = state.update(Message::Search, bounds()) else {
            panic!("expected a request");
        };
        state.update(Message::Fetched(id, Err(Error::from_status(404))), bounds());
        assert_eq!(state.state().error(), Some("Failed to fetch: Not Found"));

        state.update(Message::InputChanged("2021-01-01".into()), bounds());
        let Event::Fetch(_, date) = state.update(Message::Retry, bounds()) else {
            panic!("retry must fetch");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
    }

    #[test]
    fn refused_search_invalidates_pending_request() {
        let mut state = State::new();
        state.update(Message::InputChanged("2020-04-01".into()), bounds());
        let Event::Fetch(pending, date) = state.update(Message::Search, bounds()) else {
            panic!("expected a request");
        };
        state.update(Message::InputChanged(String::new()), bounds());
        state.update(Message::Search, bounds());

        let event = state.update(Message::Fetched(pending, Ok(record(date))), bounds());
        assert!(matches!(event, Event::None));
        assert_eq!(state.input_error(), Some(DateInputError::Missing));
    }

    #[test]
    fn day_steps_are_clamped_to_archive() {
        let mut state = State::new();
        state.update(Message::NextDay, bounds());
        assert_eq!(state.input(), "2026-10-18");

        state.update(Message::InputChanged("1995-06-16".into()), bounds());
        state.update(Message::PreviousDay, bounds());
        assert_eq!(state.input(), "1995-06-16");

        state.update(Message::NextDay, bounds());
        assert_eq!(state.input(), "1995-06-17");
    }

    #[test]
    fn today_button_fills_latest_date() {
        let mut state = State::new();
        state.update(Message::Today, bounds());
        assert_eq!(state.input(), "2026-10-18");
    }

    #[test]
    fn view_renders_in_every_state() {
        let i18n = I18n::default();
        let previews = PreviewCache::default();
        let favorites = FavoritesRegistry::default();
        let mut state = State::new();
        let ctx = || ViewContext {
            i18n: &i18n,
            previews: &previews,
            favorites: &favorites,
            bounds: bounds(),
            spinner_rotation: 0.0,
            accent: Color::WHITE,
        };
        drop(state.view(ctx()));
        state.update(Message::Search, bounds());
        drop(state.view(ctx()));
        state.update(Message::InputChanged("2020-04-01".into()), bounds());
        state.update(Message::Search, bounds());
        drop(state.view(ctx()));
    }
}
