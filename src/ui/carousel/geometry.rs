// SPDX-License-Identifier: MPL-2.0
//! Spread and page box geometry.

use crate::config::{SPREAD_MAX_WIDTH, SPREAD_WIDTH_RATIO};
use iced::{Point, Rectangle, Size};

/// The spread box: a centered column `SPREAD_WIDTH_RATIO` of the section
/// width, capped at `SPREAD_MAX_WIDTH`, spanning the full height.
#[must_use]
pub fn spread_bounds(section: Rectangle) -> Rectangle {
    let width = (section.width * SPREAD_WIDTH_RATIO).min(SPREAD_MAX_WIDTH);
    Rectangle {
        x: section.x + (section.width - width) / 2.0,
        y: section.y,
        width,
        height: section.height,
    }
}

/// Largest box of `content`'s aspect ratio that fits in `bounds`, centered.
#[must_use]
pub fn contain_fit(content: Size, bounds: Rectangle) -> Rectangle {
    if content.width <= 0.0 || content.height <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width / content.width).min(bounds.height / content.height);
    let size = Size::new(content.width * scale, content.height * scale);
    Rectangle::new(
        Point::new(
            bounds.x + (bounds.width - size.width) / 2.0,
            bounds.y + (bounds.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Rendered box of a page image inside the carousel section.
///
/// Pages without a decoded image occupy the whole spread.
#[must_use]
pub fn page_bounds(section: Rectangle, image_size: Option<Size>) -> Rectangle {
    let spread = spread_bounds(section);
    match image_size {
        Some(size) => contain_fit(size, spread),
        None => spread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn section(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(width, height))
    }

    #[test]
    fn spread_is_centered_fraction_of_section() {
        let spread = spread_bounds(section(1000.0, 800.0));
        assert_abs_diff_eq!(spread.width, 720.0, epsilon = 1e-3);
        assert_abs_diff_eq!(spread.x, 140.0, epsilon = 1e-3);
        assert_abs_diff_eq!(spread.height, 800.0, epsilon = 1e-3);
    }

    #[test]
    fn spread_width_is_capped() {
        let spread = spread_bounds(section(2000.0, 800.0));
        assert_abs_diff_eq!(spread.width, SPREAD_MAX_WIDTH, epsilon = 1e-3);
        assert_abs_diff_eq!(spread.x, 510.0, epsilon = 1e-3);
    }

    #[test]
    fn contain_fit_letterboxes_wide_content() {
        let fitted = contain_fit(Size::new(200.0, 100.0), section(400.0, 400.0));
        assert_abs_diff_eq!(fitted.width, 400.0, epsilon = 1e-3);
        assert_abs_diff_eq!(fitted.height, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(fitted.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn contain_fit_pillarboxes_tall_content() {
        let fitted = contain_fit(Size::new(100.0, 200.0), section(400.0, 400.0));
        assert_abs_diff_eq!(fitted.width, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(fitted.x, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn missing_image_fills_spread() {
        let bounds = section(1000.0, 800.0);
        assert_eq!(page_bounds(bounds, None), spread_bounds(bounds));
    }
}
