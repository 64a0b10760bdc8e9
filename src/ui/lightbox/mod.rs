// SPDX-License-Identifier: MPL-2.0
//! Zoomable lightbox over a single page.
//!
//! Zoom level decides what a touch does: at fitted zoom a quick horizontal
//! stroke changes page, when magnified the same stroke pans. Keyboard
//! navigation works at every zoom level.

pub mod component;
pub mod drag;
pub mod swipe;
pub mod view;
pub mod zoom;

pub use component::{key_message, Effect, Message, State};
pub use view::{view, ViewContext};
pub use zoom::{ZoomLevel, ZoomStep, ZoomSteps};
