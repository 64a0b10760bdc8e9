// SPDX-License-Identifier: MPL-2.0
//! Rotating arc spinner drawn straight into a canvas frame.
//!
//! Callers own the rotation angle and advance it on each frame tick, so the
//! spinner itself is stateless.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{path, Frame, LineCap, Path, Stroke};
use iced::{Color, Point, Radians};
use std::f32::consts::{FRAC_PI_2, PI};

/// Opacity of the full circle behind the moving arc.
const TRACK_ALPHA: f32 = 0.25;

/// Start and end angles of the half-circle arc for `rotation`, measured
/// clockwise from twelve o'clock.
#[must_use]
pub fn arc_span(rotation: f32) -> (f32, f32) {
    let start = rotation - FRAC_PI_2;
    (start, start + PI)
}

/// Strokes a faint track and a half-circle arc rotated by `rotation`.
pub fn stroke_spinner(frame: &mut Frame, center: Point, radius: f32, rotation: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }

    frame.stroke(
        &Path::circle(center, radius),
        Stroke::default().with_width(sizing::SPINNER_STROKE).with_color(Color {
            a: color.a * TRACK_ALPHA,
            ..color
        }),
    );

    let (start, end) = arc_span(rotation);
    let arc = Path::new(|builder| {
        builder.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(end),
        });
    });
    frame.stroke(
        &arc,
        Stroke::default()
            .with_width(sizing::SPINNER_STROKE)
            .with_color(color)
            .with_line_cap(LineCap::Round),
    );
}
