// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short, non-blocking messages for things that happen outside the current
//! tab content: a favorite was added or removed, a preference could not be
//! written, `settings.toml` was unreadable.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - visible/queued lifecycle and auto-dismiss
//! - [`toast`] - rendering
//!
//! At most three toasts are visible; the rest wait in a queue. Success and
//! info toasts go away after a few seconds, warnings stay longer, errors
//! stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
