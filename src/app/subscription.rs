// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for Escape while the dialog is open. Events captured by a
/// focused widget are left alone.
pub fn create_escape_subscription(dialog_open: bool) -> Subscription<Message> {
    if !dialog_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
/// Only active while toasts are alive, so an idle app stays idle.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
