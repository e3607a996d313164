// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes an unhandled Escape key press to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick driving the loading spinner and toast expiry. Only active
/// while something needs it.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
