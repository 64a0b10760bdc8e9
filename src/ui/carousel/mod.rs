// SPDX-License-Identifier: MPL-2.0
//! Page carousel: one full-spread page at a time with animated turns.
//!
//! Navigation is single-flight: a turn started while another is animating
//! is dropped. Clicks inside the central band of the page open the
//! lightbox; clicks elsewhere turn the page toward the clicked half.

pub mod click_zone;
pub mod component;
pub mod geometry;
pub mod indicator;
pub mod loading;
pub mod navigation;
pub mod swipe;
pub mod transition;
pub mod view;

pub use component::{Effect, Message, State};
pub use navigation::{Transition, TransitionDuration};
pub use view::{view, ViewContext};
