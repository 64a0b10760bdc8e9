// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer and touch input is handled by the canvases themselves; only
//! uncaptured key presses and animation frames come through here.

use super::Message;
use crate::config::ANIMATION_FRAME_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Forwards key presses that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}

/// Emits frame ticks only while something on screen is moving.
pub fn create_tick_subscription(carousel_animating: bool, cover_loading: bool) -> Subscription<Message> {
    if carousel_animating || cover_loading {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
