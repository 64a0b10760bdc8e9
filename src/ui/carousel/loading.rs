// SPDX-License-Identifier: MPL-2.0
//! Slow-network latch with animated spinner.
//!
//! The latch is evaluated only when the carousel settles on a page (at
//! startup and when a transition commits), i.e. after the full transition
//! duration has elapsed. A page that arrives before then never shows the
//! loading state. Once engaged, the latch holds until that page is ready or
//! a new transition starts.

/// Spinner rotation speed in radians per frame.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Page the latch is waiting for.
    waiting_on: Option<usize>,
    spinner_rotation: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The carousel settled on `page`; `ready` tells whether it can be shown.
    Settled { page: usize, ready: bool },
    /// A page became ready (decoded or failed).
    PageReady(usize),
    /// A new transition started.
    TransitionStarted,
    /// Animate the spinner.
    SpinnerTick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The latch engaged on this page.
    Engaged(usize),
    Released,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Settled { page, ready } => {
                if ready {
                    self.release()
                } else {
                    log::debug!("Page {} still loading after transition", page + 1);
                    self.waiting_on = Some(page);
                    Effect::Engaged(page)
                }
            }
            Message::PageReady(page) => {
                if self.waiting_on == Some(page) {
                    self.release()
                } else {
                    Effect::None
                }
            }
            Message::TransitionStarted => self.release(),
            Message::SpinnerTick => {
                if self.waiting_on.is_some() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    fn release(&mut self) -> Effect {
        self.spinner_rotation = 0.0;
        if self.waiting_on.take().is_some() {
            Effect::Released
        } else {
            Effect::None
        }
    }

    /// Whether the slow-network state is showing.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.waiting_on.is_some()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
