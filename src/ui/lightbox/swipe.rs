// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-navigate recognition for the lightbox.
//!
//! Only meaningful at fitted zoom; when magnified the same touch sequence
//! pans the page instead.

use crate::config::{SWIPE_MAX_DURATION_MS, SWIPE_THRESHOLD_PX};
use crate::domain::Direction;
use iced::Point;
use std::time::{Duration, Instant};

/// A quick, mostly horizontal, long enough touch stroke.
#[must_use]
pub fn is_navigation_swipe(dx: f32, dy: f32, duration: Duration) -> bool {
    dx.abs() > SWIPE_THRESHOLD_PX
        && dx.abs() > dy.abs()
        && duration < Duration::from_millis(SWIPE_MAX_DURATION_MS)
}

/// Direction of a recognized stroke; a leftward stroke goes forward.
#[must_use]
pub fn swipe_direction(dx: f32, dy: f32, duration: Duration) -> Option<Direction> {
    if !is_navigation_swipe(dx, dy, duration) {
        return None;
    }
    Some(if dx < 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeGesture {
    start: Option<(Point, Instant)>,
}

impl SwipeGesture {
    pub fn begin(&mut self, position: Point, at: Instant) {
        self.start = Some((position, at));
    }

    pub fn end(&mut self, position: Point, at: Instant) -> Option<Direction> {
        let (start, started_at) = self.start.take()?;
        swipe_direction(
            position.x - start.x,
            position.y - start.y,
            at.saturating_duration_since(started_at),
        )
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
