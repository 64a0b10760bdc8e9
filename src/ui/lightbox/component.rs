// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: one page at full size with zoom, pan and swipe.
//!
//! The lightbox is created when it opens and dropped when it closes, so
//! every opening starts fitted and centered. Page changes made inside the
//! lightbox are applied here and reported through [`Effect::Navigate`].

use super::drag;
use super::swipe::SwipeGesture;
use super::zoom::{self, ZoomLevel, ZoomSteps};
use crate::domain::{wrap_step, Direction};
use iced::keyboard::{self, key};
use iced::{Point, Vector};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Zoom(zoom::Message),
    Previous,
    Next,
    Close,
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    TouchStarted(Point),
    TouchMoved(Point),
    TouchEnded(Point),
    TouchLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The lightbox now shows this page.
    Navigate(usize),
    Close,
}

#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    page_count: usize,
    zoom: zoom::State,
    drag: drag::State,
    swipe: SwipeGesture,
}

impl State {
    /// Opens the lightbox on `index`, fitted and centered.
    #[must_use]
    pub fn open(index: usize, page_count: usize, steps: ZoomSteps) -> Self {
        log::debug!("Opening lightbox on page {}", index + 1);
        Self {
            index,
            page_count,
            zoom: zoom::State::new(steps),
            drag: drag::State::default(),
            swipe: SwipeGesture::default(),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Zoom(msg) => {
                if let zoom::Effect::Changed(level) = self.zoom.handle(msg) {
                    if !level.is_magnified() {
                        self.drag.reset();
                    }
                }
                Effect::None
            }
            Message::Previous => self.step(Direction::Backward),
            Message::Next => self.step(Direction::Forward),
            Message::Close => Effect::Close,
            Message::PointerPressed(position) => {
                self.drag.begin(position, self.zoom.level().is_magnified());
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.drag.update(position);
                Effect::None
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.drag.end();
                Effect::None
            }
            Message::TouchStarted(position) => {
                let level = self.zoom.level();
                if level.is_magnified() {
                    self.drag.begin(position, true);
                } else if level.is_fitted() {
                    self.swipe.begin(position, Instant::now());
                }
                Effect::None
            }
            Message::TouchMoved(position) => {
                self.drag.update(position);
                Effect::None
            }
            Message::TouchEnded(position) => {
                if self.drag.is_dragging() {
                    self.drag.end();
                    return Effect::None;
                }
                let swipe = self.swipe.end(position, Instant::now());
                match swipe {
                    Some(direction) if self.zoom.level().is_fitted() => self.step(direction),
                    _ => Effect::None,
                }
            }
            Message::TouchLost => {
                self.drag.end();
                self.swipe.cancel();
                Effect::None
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Effect {
        match wrap_step(self.index, self.page_count, direction) {
            Some(index) => {
                self.show(index);
                Effect::Navigate(index)
            }
            None => Effect::None,
        }
    }

    /// Shows `index`, resetting zoom and pan.
    pub fn show(&mut self, index: usize) {
        self.index = index;
        self.zoom.handle(zoom::Message::Reset);
        self.drag.reset();
        self.swipe.cancel();
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom.level()
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.drag.pan()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The swipe hint is only relevant while swiping navigates.
    #[must_use]
    pub fn shows_swipe_hint(&self) -> bool {
        self.zoom.level().is_fitted()
    }
}

/// Maps a pressed key to a lightbox message.
///
/// Arrow keys navigate at any zoom level.
#[must_use]
pub fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::Close),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}
