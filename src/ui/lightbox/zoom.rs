// SPDX-License-Identifier: MPL-2.0
//! Lightbox zoom sub-component.

use crate::config::{
    DEFAULT_BUTTON_ZOOM_STEP, DEFAULT_WHEEL_ZOOM_STEP, DEFAULT_ZOOM, MAX_ZOOM, MAX_ZOOM_STEP,
    MIN_ZOOM, MIN_ZOOM_STEP,
};

/// Zoom factor, guaranteed to be within `[MIN_ZOOM, MAX_ZOOM]`.
///
/// Values are kept at hundredth precision so that stepping up and back down
/// lands exactly on the starting level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let rounded = (factor * 100.0).round() / 100.0;
        Self(rounded.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the page is shown at its fitted size.
    #[must_use]
    pub fn is_fitted(self) -> bool {
        (self.0 - DEFAULT_ZOOM).abs() < f32::EPSILON
    }

    /// Whether the page is enlarged past its fitted size (panning allowed).
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > DEFAULT_ZOOM
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 + step.value())
    }

    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 - step.value())
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// Zoom increment, guaranteed to be within `[MIN_ZOOM_STEP, MAX_ZOOM_STEP]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Steps used by the zoom buttons and by the mouse wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSteps {
    pub button: ZoomStep,
    pub wheel: ZoomStep,
}

impl Default for ZoomSteps {
    fn default() -> Self {
        Self {
            button: ZoomStep::new(DEFAULT_BUTTON_ZOOM_STEP),
            wheel: ZoomStep::new(DEFAULT_WHEEL_ZOOM_STEP),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    level: ZoomLevel,
    steps: ZoomSteps,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    Reset,
    /// Wheel delta; positive scrolls up and zooms in.
    Wheel(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Changed(ZoomLevel),
}

impl State {
    #[must_use]
    pub fn new(steps: ZoomSteps) -> Self {
        Self {
            level: ZoomLevel::default(),
            steps,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        let next = match msg {
            Message::ZoomIn => self.level.zoom_in(self.steps.button),
            Message::ZoomOut => self.level.zoom_out(self.steps.button),
            Message::Reset => ZoomLevel::default(),
            Message::Wheel(delta) if delta > 0.0 => self.level.zoom_in(self.steps.wheel),
            Message::Wheel(delta) if delta < 0.0 => self.level.zoom_out(self.steps.wheel),
            Message::Wheel(_) => self.level,
        };
        if next == self.level {
            return Effect::None;
        }
        self.level = next;
        Effect::Changed(next)
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_in_never_exceeds_ceiling() {
        let mut state = State::default();
        for _ in 0..20 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.level().value(), MAX_ZOOM);
        assert!(state.level().is_max());
        assert_eq!(state.handle(Message::ZoomIn), Effect::None);
    }

    #[test]
    fn zoom_out_never_goes_below_floor() {
        let mut state = State::default();
        for _ in 0..20 {
            state.handle(Message::ZoomOut);
        }
        assert_abs_diff_eq!(state.level().value(), MIN_ZOOM);
        assert!(state.level().is_min());
    }

    #[test]
    fn two_button_steps_reach_double_size() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        let effect = state.handle(Message::ZoomIn);
        assert_eq!(effect, Effect::Changed(ZoomLevel::new(2.0)));
        assert_abs_diff_eq!(state.level().value(), 2.0);
    }

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        let mut state = State::default();
        state.handle(Message::Wheel(1.0));
        assert_abs_diff_eq!(state.level().value(), 1.1);
        state.handle(Message::Wheel(-3.0));
        assert!(state.level().is_fitted());
        state.handle(Message::Wheel(-1.0));
        assert_abs_diff_eq!(state.level().value(), 0.9);
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Wheel(0.0)), Effect::None);
    }

    #[test]
    fn reset_returns_to_fitted() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        state.handle(Message::Reset);
        assert!(state.level().is_fitted());
        assert!(!state.level().is_magnified());
    }

    #[test]
    fn wheel_steps_round_trip_exactly() {
        let mut level = ZoomLevel::default();
        let step = ZoomStep::new(0.1);
        for _ in 0..7 {
            level = level.zoom_in(step);
        }
        for _ in 0..7 {
            level = level.zoom_out(step);
        }
        assert!(level.is_fitted());
    }

    #[test]
    fn zoom_step_is_clamped() {
        assert_abs_diff_eq!(ZoomStep::new(0.0).value(), MIN_ZOOM_STEP);
        assert_abs_diff_eq!(ZoomStep::new(9.0).value(), MAX_ZOOM_STEP);
    }
}
