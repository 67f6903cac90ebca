// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions.
//!
//! Native keyboard and window events are turned into navigation keys and
//! resize messages; a periodic tick runs only while toasts are visible.

use super::Message;
use crate::application::router::NavKey;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Maps a key to a navigation key, if it is one.
#[must_use]
pub fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(NavKey::Left),
        Key::Named(Named::ArrowRight) => Some(NavKey::Right),
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            window: window_id,
            size,
        }),
        Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowResized {
            window: window_id,
            size,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => nav_key(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Drives toast auto-dismissal.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(200))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
