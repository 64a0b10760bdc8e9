// SPDX-License-Identifier: MPL-2.0
//! Single-flight page navigation state machine.
//!
//! `Idle → navigate → Transitioning → commit → Idle`. While a transition is
//! in flight further navigation requests are dropped, not queued. The page
//! count is fixed at construction; with zero pages every request is a no-op.

use crate::config::{DEFAULT_TRANSITION_MS, MAX_TRANSITION_MS, MIN_TRANSITION_MS};
use crate::domain::{wrap_step, Direction};
use std::time::Duration;

/// Transition duration, guaranteed to be within the configurable range.
///
/// # Example
///
/// ```
/// use iced_folio::ui::carousel::navigation::TransitionDuration;
///
/// assert_eq!(TransitionDuration::new(400).millis(), 400);
/// assert_eq!(TransitionDuration::new(0).millis(), 50); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

/// A transition that has just started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    current: usize,
    page_count: usize,
    in_flight: Option<Transition>,
}

impl Navigation {
    /// Starts on page 0 of `page_count` pages.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            page_count,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Target of the in-flight transition.
    #[must_use]
    pub fn pending_page(&self) -> Option<usize> {
        self.in_flight.map(|t| t.to)
    }

    /// Direction of the in-flight transition.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.in_flight.map(|t| t.direction)
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.in_flight
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a transition one page in `direction`.
    ///
    /// Returns `None` (and changes nothing) when a transition is already in
    /// flight or there are no pages.
    pub fn navigate(&mut self, direction: Direction) -> Option<Transition> {
        if self.in_flight.is_some() {
            log::trace!("Dropping {direction:?} navigation: transition in flight");
            return None;
        }
        let to = wrap_step(self.current, self.page_count, direction)?;
        let transition = Transition {
            from: self.current,
            to,
            direction,
        };
        self.in_flight = Some(transition);
        Some(transition)
    }

    /// Completes the in-flight transition and returns the new current page.
    pub fn commit(&mut self) -> Option<usize> {
        let transition = self.in_flight.take()?;
        self.current = transition.to;
        Some(self.current)
    }

    /// Drops the in-flight transition, leaving the current page untouched.
    pub fn abandon(&mut self) -> Option<Transition> {
        self.in_flight.take()
    }
}
