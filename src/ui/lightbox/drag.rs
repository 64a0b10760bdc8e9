// SPDX-License-Identifier: MPL-2.0
//! Grab-and-drag panning of a magnified page.
//!
//! Pan is a pure, unbounded translation: the page may be dragged fully out
//! of view.

use iced::{Point, Vector};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pan: Vector,
    /// Pointer position minus the pan at drag start.
    anchor: Option<Point>,
}

impl State {
    /// Starts a drag at `pointer`. Refused unless the page is magnified.
    pub fn begin(&mut self, pointer: Point, magnified: bool) -> bool {
        if !magnified {
            return false;
        }
        self.anchor = Some(Point::new(pointer.x - self.pan.x, pointer.y - self.pan.y));
        true
    }

    /// Moves the drag to `pointer` and returns the new pan.
    pub fn update(&mut self, pointer: Point) -> Option<Vector> {
        let anchor = self.anchor?;
        self.pan = pointer - anchor;
        Some(self.pan)
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Ends any drag and recenters the page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_is_refused_at_fitted_zoom() {
        let mut state = State::default();
        assert!(!state.begin(Point::new(10.0, 10.0), false));
        assert!(!state.is_dragging());
        assert_eq!(state.update(Point::new(50.0, 50.0)), None);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn pan_follows_pointer_delta() {
        let mut state = State::default();
        assert!(state.begin(Point::new(100.0, 100.0), true));
        assert_eq!(
            state.update(Point::new(130.0, 90.0)),
            Some(Vector::new(30.0, -10.0))
        );
    }

    #[test]
    fn second_drag_continues_from_current_pan() {
        let mut state = State::default();
        state.begin(Point::new(0.0, 0.0), true);
        state.update(Point::new(20.0, 5.0));
        state.end();
        assert!(!state.is_dragging());

        state.begin(Point::new(200.0, 200.0), true);
        state.update(Point::new(210.0, 200.0));
        assert_eq!(state.pan(), Vector::new(30.0, 5.0));
    }

    #[test]
    fn pan_is_unbounded() {
        let mut state = State::default();
        state.begin(Point::ORIGIN, true);
        state.update(Point::new(-5000.0, 9000.0));
        assert_eq!(state.pan(), Vector::new(-5000.0, 9000.0));
    }

    #[test]
    fn reset_clears_pan_and_drag() {
        let mut state = State::default();
        state.begin(Point::ORIGIN, true);
        state.update(Point::new(4.0, 4.0));
        state.reset();
        assert_eq!(state, State::default());
    }
}
