// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and page image fixtures.
//!
//! Float assertions come from the `approx` crate, which handles
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encodes a solid `width` x `height` PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 90, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("PNG encoding of an in-memory image cannot fail");
    out.into_inner()
}
