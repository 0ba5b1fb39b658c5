// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Drag-and-drop and the paste shortcut only exist while the Scan screen is
//! active. Leaving it drops the subscription, so a paste on the About screen
//! never reaches the scan controller.

use super::{Message, Screen};
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Interval of the spinner and notification tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Scan => event::listen_with(|event, status, _window_id| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DragHover(true)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragHover(false)),
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if status == event::Status::Ignored && is_paste_shortcut(&key, modifiers) =>
            {
                Some(Message::PasteRequested)
            }
            _ => None,
        }),
        Screen::About => Subscription::none(),
    }
}

/// Whether the key press is the platform paste shortcut.
#[must_use]
pub fn is_paste_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    modifiers.command()
        && matches!(key.as_ref(), Key::Character(c) if c.eq_ignore_ascii_case("v"))
}

/// Creates a periodic tick while something on screen animates or expires.
pub fn create_tick_subscription(is_scanning: bool, has_notifications: bool) -> Subscription<Message> {
    if is_scanning || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
