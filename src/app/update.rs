// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components only change their own state and report an `Event`; the
//! handlers here turn those events into side effects: HTTP requests,
//! preference writes, toasts and opening the system browser.

use super::favorites::FavoritesRegistry;
use super::navigation::{Navigation, Tab};
use super::preferences::{self, PreferenceStore};
use super::{theme, Message};
use crate::apod::{media, ApodClient, DateBounds, PictureRecord, PreviewCache};
use crate::error::Error;
use crate::ui::components::picture_card::Action;
use crate::ui::date_picker;
use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::today;
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::future::Future;
use std::time::Instant;

/// Toast key shown when the system browser cannot be launched.
pub const BROWSER_ERROR: &str = "notification-browser-error";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub navigation: &'a mut Navigation,
    pub today: &'a mut today::State,
    pub date_picker: &'a mut date_picker::State,
    pub gallery: &'a mut gallery::State,
    pub favorites: &'a mut FavoritesRegistry,
    pub theme_mode: &'a mut ThemeMode,
    pub store: &'a mut dyn PreferenceStore,
    /// `None` when the HTTP client could not be built; every request then
    /// fails immediately.
    pub client: Option<&'a ApodClient>,
    pub previews: &'a mut PreviewCache,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

fn client_unavailable() -> Error {
    Error::Network("HTTP client could not be initialized".to_string())
}

/// Runs `call` on a clone of the client and maps the outcome with `wrap`.
fn request<T, Fut>(
    client: Option<&ApodClient>,
    call: impl FnOnce(ApodClient) -> Fut,
    wrap: impl FnOnce(Result<T, Error>) -> Message + Send + 'static,
) -> Task<Message>
where
    Fut: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
{
    match client {
        Some(client) => Task::perform(call(client.clone()), wrap),
        None => Task::done(wrap(Err(client_unavailable()))),
    }
}

/// Starts preview downloads for records whose image is not cached yet.
pub fn request_previews<'r>(
    previews: &mut PreviewCache,
    client: Option<&ApodClient>,
    records: impl IntoIterator<Item = &'r PictureRecord>,
) -> Task<Message> {
    let urls: Vec<&str> = records.into_iter().filter_map(PictureRecord::preview_url).collect();
    previews.reserve(urls.len());

    let mut tasks = Vec::new();
    for url in urls {
        if !previews.request(url) {
            continue;
        }
        match client {
            Some(client) => tasks.push(Task::perform(
                media::download(client.clone(), url.to_string()),
                |(url, result)| Message::PreviewLoaded(url, result),
            )),
            None => previews.complete(url.to_string(), Err(client_unavailable())),
        }
    }
    Task::batch(tasks)
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::SelectTab(tab) => select_tab(ctx, tab),
        navbar::Event::ToggleTheme => {
            if let Err(err) = theme::toggle(ctx.theme_mode, &mut *ctx.store) {
                tracing::warn!(error = %err, "failed to persist theme");
                ctx.notifications
                    .push(Notification::warning(preferences::SAVE_WARNING));
            }
            Task::none()
        }
    }
}

/// Switches tab and loads its content when needed.
pub fn select_tab(ctx: &mut UpdateContext<'_>, tab: Tab) -> Task<Message> {
    ctx.navigation.select_tab(tab);
    match tab {
        Tab::Today => {
            let event = ctx.today.activate();
            handle_today_event(ctx, event)
        }
        Tab::Recent => {
            let event = ctx.gallery.activate();
            handle_gallery_event(ctx, event)
        }
        Tab::Favorites => request_previews(ctx.previews, ctx.client, ctx.favorites.records()),
        Tab::DatePick => Task::none(),
    }
}

pub fn handle_today_message(ctx: &mut UpdateContext<'_>, message: today::Message) -> Task<Message> {
    let event = ctx.today.update(message);
    handle_today_event(ctx, event)
}

pub fn handle_today_event(ctx: &mut UpdateContext<'_>, event: today::Event) -> Task<Message> {
    match event {
        today::Event::None => Task::none(),
        today::Event::Fetch(id) => request(
            ctx.client,
            |client| async move { client.today().await },
            move |result| Message::Today(today::Message::Fetched(id, result)),
        ),
        today::Event::Loaded(record) => request_previews(ctx.previews, ctx.client, [&record]),
        today::Event::Card(action) => handle_card_action(ctx, action),
    }
}

pub fn handle_date_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: date_picker::Message,
) -> Task<Message> {
    match ctx.date_picker.update(message, DateBounds::today()) {
        date_picker::Event::None => Task::none(),
        date_picker::Event::Fetch(id, date) => request(
            ctx.client,
            move |client| async move { client.by_date(date).await },
            move |result| Message::DatePicker(date_picker::Message::Fetched(id, result)),
        ),
        date_picker::Event::Loaded(record) => request_previews(ctx.previews, ctx.client, [&record]),
        date_picker::Event::Card(action) => handle_card_action(ctx, action),
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let event = ctx.gallery.update(message);
    handle_gallery_event(ctx, event)
}

fn handle_gallery_event(ctx: &mut UpdateContext<'_>, event: gallery::Event) -> Task<Message> {
    match event {
        gallery::Event::None => Task::none(),
        gallery::Event::Fetch(id, count) => request(
            ctx.client,
            move |client| async move { client.recent(count).await },
            move |result| Message::Gallery(gallery::Message::Fetched(id, result)),
        ),
        gallery::Event::Loaded(records) => request_previews(ctx.previews, ctx.client, &records),
        gallery::Event::Card(action) => handle_card_action(ctx, action),
    }
}

pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    match message {
        detail::Message::Back => {
            ctx.navigation.close_selection();
            Task::none()
        }
        detail::Message::Card(action) => handle_card_action(ctx, action),
    }
}

pub fn handle_card_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    match action {
        Action::ShowDetails(record) => {
            let task = request_previews(ctx.previews, ctx.client, [&record]);
            ctx.navigation.select_item(record);
            task
        }
        Action::ToggleFavorite(record) => {
            toggle_favorite(ctx, &record);
            Task::none()
        }
        Action::OpenInBrowser(url) => {
            open_in_browser(ctx.notifications, &url);
            Task::none()
        }
    }
}

/// Flips the favorite state of `record` and confirms with a toast. A failed
/// write adds a warning; the in-memory registry keeps the change.
pub fn toggle_favorite(ctx: &mut UpdateContext<'_>, record: &PictureRecord) {
    let (outcome, saved) = ctx.favorites.toggle(record, &mut *ctx.store);
    ctx.notifications.push(
        Notification::success(outcome.notification_key()).with_arg("title", record.title.clone()),
    );
    if let Err(err) = saved {
        tracing::warn!(error = %err, "failed to persist favorites");
        ctx.notifications
            .push(Notification::warning(preferences::SAVE_WARNING));
    }
}

fn open_in_browser(notifications: &mut notifications::Manager, url: &str) {
    tracing::debug!(%url, "opening in browser");
    if let Err(err) = webbrowser::open(url) {
        tracing::warn!(%url, error = %err, "failed to open browser");
        notifications.push(Notification::warning(BROWSER_ERROR).with_arg("url", url));
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    ctx.notifications.tick(now);
    Task::none()
}

/// Escape closes the detail view; it does nothing on a plain tab.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.navigation.has_selection() {
        ctx.navigation.close_selection();
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::{MediaType, Preview};
    use crate::app::preferences::MemoryStore;

    struct Fixture {
        navigation: Navigation,
        today: today::State,
        date_picker: date_picker::State,
        gallery: gallery::State,
        favorites: FavoritesRegistry,
        theme_mode: ThemeMode,
        store: MemoryStore,
        previews: PreviewCache,
        notifications: notifications::Manager,
        spinner_rotation: f32,
    }

    impl Fixture {
        fn new(store: MemoryStore) -> Self {
            Self {
                navigation: Navigation::new(),
                today: today::State::new(),
                date_picker: date_picker::State::new(),
                gallery: gallery::State::default(),
                favorites: FavoritesRegistry::default(),
                theme_mode: ThemeMode::Dark,
                store,
                previews: PreviewCache::default(),
                notifications: notifications::Manager::new(),
                spinner_rotation: 0.0,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                navigation: &mut self.navigation,
                today: &mut self.today,
                date_picker: &mut self.date_picker,
                gallery: &mut self.gallery,
                favorites: &mut self.favorites,
                theme_mode: &mut self.theme_mode,
                store: &mut self.store,
                client: None,
                previews: &mut self.previews,
                notifications: &mut self.notifications,
                spinner_rotation: &mut self.spinner_rotation,
            }
        }
    }

    fn record() -> PictureRecord {
        PictureRecord {
            date: "2024-10-10".parse().unwrap(),
            title: "Aurora over Lofoten".into(),
            explanation: String::new(),
            media_type: MediaType::Image,
            url: "https://apod.example/aurora.jpg".into(),
            hdurl: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    #[test]
    fn toggle_favorite_confirms_with_toast() {
        let mut fixture = Fixture::new(MemoryStore::new());
        toggle_favorite(&mut fixture.ctx(), &record());

        assert!(fixture.favorites.is_favorite(&record()));
        let keys: Vec<_> = fixture
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["notification-favorite-added"]);
    }

    #[test]
    fn failed_favorite_write_warns_but_keeps_change() {
        let mut fixture = Fixture::new(MemoryStore::read_only());
        toggle_favorite(&mut fixture.ctx(), &record());

        assert!(fixture.favorites.is_favorite(&record()));
        assert!(fixture
            .notifications
            .visible()
            .any(|n| n.message_key() == preferences::SAVE_WARNING));
    }

    #[test]
    fn theme_toggle_persists() {
        let mut fixture = Fixture::new(MemoryStore::new());
        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::ToggleTheme);
        assert_eq!(fixture.theme_mode, ThemeMode::Light);
        assert_eq!(theme::load(&fixture.store), ThemeMode::Light);
        assert!(!fixture.notifications.has_notifications());
    }

    #[test]
    fn show_details_selects_record_and_escape_closes() {
        let mut fixture = Fixture::new(MemoryStore::new());
        fixture.navigation.select_tab(Tab::Recent);
        let _ = handle_card_action(&mut fixture.ctx(), Action::ShowDetails(record()));
        assert_eq!(fixture.navigation.selected(), Some(&record()));

        let _ = handle_escape(&mut fixture.ctx());
        assert!(!fixture.navigation.has_selection());
        assert_eq!(fixture.navigation.active_tab(), Tab::Recent);
    }

    #[test]
    fn previews_without_client_fail_immediately() {
        let mut fixture = Fixture::new(MemoryStore::new());
        let _ = request_previews(&mut fixture.previews, None, [&record()]);
        assert!(matches!(
            fixture.previews.peek("https://apod.example/aurora.jpg"),
            Some(Preview::Failed(_))
        ));
    }

    #[test]
    fn favorites_tab_keeps_every_preview_beyond_cache_capacity() {
        let mut fixture = Fixture::new(MemoryStore::new());
        let start: chrono::NaiveDate = "2020-01-01".parse().unwrap();
        let count = crate::config::PREVIEW_CACHE_CAPACITY + 36;
        for day in 0..count {
            let mut favorite = record();
            favorite.date = start + chrono::Days::new(day as u64);
            favorite.url = format!("https://apod.example/{day}.jpg");
            fixture.favorites.toggle(&favorite, &mut fixture.store).1.unwrap();
        }

        let _ = select_tab(&mut fixture.ctx(), Tab::Favorites);

        let missing = fixture
            .favorites
            .records()
            .iter()
            .filter_map(PictureRecord::preview_url)
            .filter(|url| fixture.previews.peek(url).is_none())
            .count();
        assert_eq!(missing, 0);
    }

    #[test]
    fn selecting_recent_tab_starts_loading() {
        let mut fixture = Fixture::new(MemoryStore::new());
        let _ = select_tab(&mut fixture.ctx(), Tab::Recent);
        assert_eq!(fixture.navigation.active_tab(), Tab::Recent);
        assert!(fixture.gallery.state().is_loading());
    }

    #[test]
    fn tick_advances_spinner() {
        let mut fixture = Fixture::new(MemoryStore::new());
        let _ = handle_tick(&mut fixture.ctx(), Instant::now());
        assert!(fixture.spinner_rotation > 0.0);
    }
}
