// SPDX-License-Identifier: MPL-2.0
//! Click routing on the carousel section.
//!
//! A click inside the rendered page whose relative x falls in the center
//! band opens the lightbox; any other click navigates toward the side of the
//! section it landed on.

use crate::config::{CENTER_BAND_END, CENTER_BAND_START};
use crate::domain::Direction;
use iced::{Point, Rectangle};

/// What a click on the carousel means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    OpenViewer,
    Navigate(Direction),
}

/// Inclusive on all four edges.
#[must_use]
pub fn contains_inclusive(rect: Rectangle, point: Point) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Horizontal position of `point` relative to `rect` (0.0 = left edge).
#[must_use]
pub fn relative_x(rect: Rectangle, point: Point) -> Option<f32> {
    (rect.width > 0.0).then(|| (point.x - rect.x) / rect.width)
}

/// Routes a click at `pointer` given the rendered `image` box and the
/// enclosing `section`, all in the same coordinate space.
#[must_use]
pub fn route_click(pointer: Point, image: Rectangle, section: Rectangle) -> ClickAction {
    if contains_inclusive(image, pointer) {
        if let Some(rel) = relative_x(image, pointer) {
            if (CENTER_BAND_START..=CENTER_BAND_END).contains(&rel) {
                return ClickAction::OpenViewer;
            }
        }
    }

    let midpoint = section.x + section.width / 2.0;
    if pointer.x < midpoint {
        ClickAction::Navigate(Direction::Backward)
    } else {
        ClickAction::Navigate(Direction::Forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Rectangle {
        Rectangle::new(Point::ORIGIN, iced::Size::new(1000.0, 800.0))
    }

    fn image() -> Rectangle {
        Rectangle::new(Point::new(200.0, 100.0), iced::Size::new(600.0, 600.0))
    }

    fn at_relative(rel: f32) -> Point {
        let img = image();
        Point::new(img.x + img.width * rel, img.y + img.height / 2.0)
    }

    #[test]
    fn center_of_image_opens_viewer() {
        assert_eq!(
            route_click(at_relative(0.5), image(), section()),
            ClickAction::OpenViewer
        );
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(
            route_click(at_relative(0.30), image(), section()),
            ClickAction::OpenViewer
        );
        assert_eq!(
            route_click(at_relative(0.70), image(), section()),
            ClickAction::OpenViewer
        );
    }

    #[test]
    fn left_part_of_image_navigates_backward() {
        assert_eq!(
            route_click(at_relative(0.1), image(), section()),
            ClickAction::Navigate(Direction::Backward)
        );
    }

    #[test]
    fn right_part_of_image_navigates_forward() {
        assert_eq!(
            route_click(at_relative(0.9), image(), section()),
            ClickAction::Navigate(Direction::Forward)
        );
    }

    #[test]
    fn outside_image_uses_section_midpoint() {
        let section = section();
        let right_margin = Point::new(section.width * 0.9, 50.0);
        let left_margin = Point::new(section.width * 0.05, 750.0);
        assert_eq!(
            route_click(right_margin, image(), section),
            ClickAction::Navigate(Direction::Forward)
        );
        assert_eq!(
            route_click(left_margin, image(), section),
            ClickAction::Navigate(Direction::Backward)
        );
    }

    #[test]
    fn center_band_above_image_does_not_open() {
        let above = Point::new(500.0, 50.0);
        assert_eq!(
            route_click(above, image(), section()),
            ClickAction::Navigate(Direction::Forward)
        );
    }

    #[test]
    fn zero_width_image_never_opens() {
        let flat = Rectangle::new(Point::new(500.0, 100.0), iced::Size::new(0.0, 600.0));
        assert_eq!(
            route_click(Point::new(500.0, 300.0), flat, section()),
            ClickAction::Navigate(Direction::Forward)
        );
    }
}
