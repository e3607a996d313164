// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the tabs.
//!
//! The `App` struct wires together the domains (fetching, favorites, theme,
//! localization) and translates messages into side effects like HTTP
//! requests or preference writes. Startup policy (initial tab, window size,
//! where preferences live) is kept here so it is easy to audit.

pub mod favorites;
mod message;
pub mod navigation;
pub mod paths;
pub mod preferences;
mod subscription;
pub mod theme;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::apod::{ApodClient, PreviewCache};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::date_picker;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::today;
use favorites::FavoritesRegistry;
use iced::{window, Element, Subscription, Task, Theme};
use navigation::Navigation;
use preferences::PreferenceStore;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigation: Navigation,
    today: today::State,
    date_picker: date_picker::State,
    gallery: gallery::State,
    favorites: FavoritesRegistry,
    theme_mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
    client: Option<ApodClient>,
    base_url: String,
    previews: PreviewCache,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("navigation", &self.navigation)
            .field("base_url", &self.base_url)
            .field("favorites", &self.favorites.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1040;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 820;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and preferences, then starts fetching today's
    /// picture.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let store = preferences::open(flags.data_dir.as_ref().map(PathBuf::from));

        let (mut app, task) = Self::with_store(flags, &config, store);
        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }
        (app, task)
    }

    fn with_store(flags: Flags, config: &Config, store: Box<dyn PreferenceStore>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let base_url = flags
            .api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.api_base_url().to_string());

        let mut notifications = notifications::Manager::new();
        let client = match ApodClient::new(base_url.clone()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "failed to build HTTP client");
                notifications.push(notifications::Notification::error("notification-client-error"));
                None
            }
        };
        tracing::info!(%base_url, "using APOD backend");

        let favorites = FavoritesRegistry::load(store.as_ref());
        let theme_mode = theme::load(store.as_ref());

        let mut app = App {
            i18n,
            navigation: Navigation::new(),
            today: today::State::new(),
            date_picker: date_picker::State::new(),
            gallery: gallery::State::new(config.recent_count()),
            favorites,
            theme_mode,
            store,
            client,
            base_url,
            previews: PreviewCache::default(),
            notifications,
            spinner_rotation: 0.0,
        };

        let task = {
            let mut ctx = app.update_context();
            let event = ctx.today.activate();
            update::handle_today_event(&mut ctx, event)
        };
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            navigation: &mut self.navigation,
            today: &mut self.today,
            date_picker: &mut self.date_picker,
            gallery: &mut self.gallery,
            favorites: &mut self.favorites,
            theme_mode: &mut self.theme_mode,
            store: self.store.as_mut(),
            client: self.client.as_ref(),
            previews: &mut self.previews,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigation.selected() {
            Some(record) => format!("{} - {app_name}", record.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn is_loading(&self) -> bool {
        self.today.state().is_loading()
            || self.date_picker.state().is_loading()
            || self.gallery.state().is_loading()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Today(today_message) => update::handle_today_message(&mut ctx, today_message),
            Message::DatePicker(date_message) => {
                update::handle_date_picker_message(&mut ctx, date_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Favorites(action) | Message::Footer(action) => {
                update::handle_card_action(&mut ctx, action)
            }
            Message::Detail(detail_message) => update::handle_detail_message(&mut ctx, detail_message),
            Message::PreviewLoaded(url, result) => {
                ctx.previews.complete(url, result);
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigation: &self.navigation,
            today: &self.today,
            date_picker: &self.date_picker,
            gallery: &self.gallery,
            favorites: &self.favorites,
            previews: &self.previews,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            spinner_rotation: self.spinner_rotation,
            base_url: &self.base_url,
        })
    }
}
