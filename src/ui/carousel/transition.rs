// SPDX-License-Identifier: MPL-2.0
//! Pluggable rendering of page transitions.
//!
//! Navigation is one state machine; how the two pages involved look at a
//! given point of the transition is decided by a [`TransitionRenderer`].
//! Renderers return layers in draw order (bottom first).

use super::navigation::Transition;
use crate::config::TransitionStyle;
use crate::domain::Direction;

/// One page drawn at one moment of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub page: usize,
    pub opacity: f32,
    /// Horizontal offset as a fraction of the spread width (positive = right).
    pub offset: f32,
}

impl Layer {
    #[must_use]
    pub fn settled(page: usize) -> Self {
        Self {
            page,
            opacity: 1.0,
            offset: 0.0,
        }
    }
}

/// Computes the layers for a transition at `progress` in `[0, 1]`.
pub trait TransitionRenderer {
    fn layers(&self, transition: Transition, progress: f32) -> Vec<Layer>;
}

/// Opacity crossfade.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crossfade;

/// Both pages slide along a horizontal track.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slide;

/// Outgoing page stays until the transition completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cut;

impl TransitionRenderer for Crossfade {
    fn layers(&self, transition: Transition, progress: f32) -> Vec<Layer> {
        let t = ease_in_out(progress);
        vec![
            Layer {
                page: transition.from,
                opacity: 1.0 - t,
                offset: 0.0,
            },
            Layer {
                page: transition.to,
                opacity: t,
                offset: 0.0,
            },
        ]
    }
}

impl TransitionRenderer for Slide {
    fn layers(&self, transition: Transition, progress: f32) -> Vec<Layer> {
        let t = ease_in_out(progress);
        // Forward: the track moves left, the incoming page enters from the right.
        let sign = match transition.direction {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        };
        vec![
            Layer {
                page: transition.from,
                opacity: 1.0,
                offset: sign * t,
            },
            Layer {
                page: transition.to,
                opacity: 1.0,
                offset: sign * (t - 1.0),
            },
        ]
    }
}

impl TransitionRenderer for Cut {
    fn layers(&self, transition: Transition, progress: f32) -> Vec<Layer> {
        let page = if progress >= 1.0 {
            transition.to
        } else {
            transition.from
        };
        vec![Layer::settled(page)]
    }
}

/// Renderer for a configured style.
#[must_use]
pub fn renderer(style: TransitionStyle) -> &'static dyn TransitionRenderer {
    match style {
        TransitionStyle::Crossfade => &Crossfade,
        TransitionStyle::Slide => &Slide,
        TransitionStyle::Cut => &Cut,
    }
}

/// Cubic ease-in-out, clamped to `[0, 1]`.
#[must_use]
pub fn ease_in_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn forward() -> Transition {
        Transition {
            from: 3,
            to: 4,
            direction: Direction::Forward,
        }
    }

    fn backward() -> Transition {
        Transition {
            from: 0,
            to: 16,
            direction: Direction::Backward,
        }
    }

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(3.0), 1.0);
    }

    #[test]
    fn crossfade_swaps_opacity() {
        let start = Crossfade.layers(forward(), 0.0);
        let end = Crossfade.layers(forward(), 1.0);
        assert_abs_diff_eq!(start[0].opacity, 1.0);
        assert_abs_diff_eq!(start[1].opacity, 0.0);
        assert_abs_diff_eq!(end[0].opacity, 0.0);
        assert_abs_diff_eq!(end[1].opacity, 1.0);
        assert_eq!(end[1].page, 4);
    }

    #[test]
    fn slide_forward_enters_from_the_right() {
        let start = Slide.layers(forward(), 0.0);
        assert_abs_diff_eq!(start[0].offset, 0.0);
        assert_abs_diff_eq!(start[1].offset, 1.0);

        let end = Slide.layers(forward(), 1.0);
        assert_abs_diff_eq!(end[0].offset, -1.0);
        assert_abs_diff_eq!(end[1].offset, 0.0);
    }

    #[test]
    fn slide_backward_enters_from_the_left() {
        let start = Slide.layers(backward(), 0.0);
        assert_abs_diff_eq!(start[1].offset, -1.0);
        let end = Slide.layers(backward(), 1.0);
        assert_abs_diff_eq!(end[0].offset, 1.0);
        assert_eq!(end[1].page, 16);
    }

    #[test]
    fn cut_holds_outgoing_page_until_done() {
        assert_eq!(Cut.layers(forward(), 0.99), vec![Layer::settled(3)]);
        assert_eq!(Cut.layers(forward(), 1.0), vec![Layer::settled(4)]);
    }

    #[test]
    fn renderer_follows_style() {
        let layers = renderer(TransitionStyle::Cut).layers(forward(), 0.5);
        assert_eq!(layers.len(), 1);
        let layers = renderer(TransitionStyle::Crossfade).layers(forward(), 0.5);
        assert_eq!(layers.len(), 2);
    }
}
