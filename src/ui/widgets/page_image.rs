// SPDX-License-Identifier: MPL-2.0
//! Drawing decoded pages onto a canvas frame.

use crate::media::ImageData;
use iced::advanced::image::{FilterMethod, Image};
use iced::widget::canvas::Frame;
use iced::{Rectangle, Size};

/// Natural size of a decoded page, in logical pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn natural_size(image: &ImageData) -> Size {
    Size::new(image.width as f32, image.height as f32)
}

/// Draws `image` stretched to `bounds` at the given opacity.
pub fn draw(frame: &mut Frame, image: &ImageData, bounds: Rectangle, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    frame.draw_image(
        bounds,
        Image::new(image.handle.clone())
            .filter_method(FilterMethod::Linear)
            .opacity(opacity.min(1.0)),
    );
}
