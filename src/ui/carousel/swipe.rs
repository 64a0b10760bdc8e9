// SPDX-License-Identifier: MPL-2.0
//! Single-finger swipe recognition for the carousel.
//!
//! Displacement is measured as `end - start`: a finger moving left produces
//! a negative `dx` and pages forward.

use crate::config::SWIPE_THRESHOLD_PX;
use crate::domain::Direction;
use iced::Point;

/// What to do with a touch-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDisposition {
    /// Horizontal movement dominates: consume the event so nothing scrolls.
    Capture,
    /// Let the event through (vertical scrolling, or no tracked touch).
    PassThrough,
}

/// Disposition of a move from `start` to `current`.
#[must_use]
pub fn move_disposition(start: Point, current: Point) -> MoveDisposition {
    let dx = current.x - start.x;
    let dy = current.y - start.y;
    if dx.abs() > dy.abs() {
        MoveDisposition::Capture
    } else {
        MoveDisposition::PassThrough
    }
}

/// Direction for a horizontal displacement, if it is long enough to count.
#[must_use]
pub fn classify_swipe(dx: f32) -> Option<Direction> {
    if dx.abs() <= SWIPE_THRESHOLD_PX {
        None
    } else if dx < 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

/// Tracks the active touch between start and end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn begin(&mut self, position: Point) {
        self.start = Some(position);
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    #[must_use]
    pub fn moved(&self, position: Point) -> MoveDisposition {
        match self.start {
            Some(start) => move_disposition(start, position),
            None => MoveDisposition::PassThrough,
        }
    }

    /// Ends the touch. A touch-end with no recorded start yields nothing.
    pub fn end(&mut self, position: Point) -> Option<Direction> {
        let start = self.start.take()?;
        classify_swipe(position.x - start.x)
    }

    /// Forgets the touch without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_moving_left_pages_forward() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(300.0, 200.0));
        assert_eq!(tracker.end(Point::new(220.0, 205.0)), Some(Direction::Forward));
    }

    #[test]
    fn finger_moving_right_pages_backward() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(100.0, 200.0));
        assert_eq!(tracker.end(Point::new(180.0, 200.0)), Some(Direction::Backward));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_swipe(50.0), None);
        assert_eq!(classify_swipe(-50.0), None);
        assert_eq!(classify_swipe(-50.5), Some(Direction::Forward));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn end_resets_tracking() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.end(Point::new(-100.0, 0.0));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.end(Point::new(-200.0, 0.0)), None);
    }

    #[test]
    fn horizontal_moves_are_captured() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(100.0, 100.0));
        assert_eq!(tracker.moved(Point::new(130.0, 110.0)), MoveDisposition::Capture);
        assert_eq!(
            tracker.moved(Point::new(105.0, 160.0)),
            MoveDisposition::PassThrough
        );
    }

    #[test]
    fn moves_without_touch_pass_through() {
        let tracker = SwipeTracker::default();
        assert_eq!(
            tracker.moved(Point::new(300.0, 0.0)),
            MoveDisposition::PassThrough
        );
    }
}
