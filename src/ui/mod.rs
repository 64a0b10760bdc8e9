// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports what the
//! application must do through an effect or event value.
//!
//! # Reader
//!
//! - [`carousel`] - Page-by-page reading with animated turns
//! - [`lightbox`] - Zoomable single page view
//!
//! # Shell
//!
//! - [`cover`] - Issue cover with the call to action
//! - [`navbar`] - Title bar with the About button
//! - [`about`] - About overlay
//!
//! # Shared Infrastructure
//!
//! - [`timers`] - Cancellable component timers
//! - [`widgets`] - Canvas drawing helpers (pages, spinner)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod about;
pub mod carousel;
pub mod cover;
pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod styles;
pub mod timers;
pub mod widgets;
