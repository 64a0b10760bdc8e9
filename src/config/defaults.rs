// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Page transition duration and slow-network latch
//! - **Gestures**: Swipe thresholds and click-zone band
//! - **Zoom**: Lightbox zoom bounds and steps
//! - **Indicator**: Page indicator auto-hide delay
//! - **Layout**: Spread geometry
//! - **Pages**: Default page source and cache sizing

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of one page transition (in milliseconds).
///
/// Also used as the delay before the slow-network loading latch engages.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Minimum configurable transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum configurable transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Redraw interval while a transition is animating (in milliseconds).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel beyond which a touch counts as a swipe (in logical pixels).
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Lightbox swipes must complete within this many milliseconds.
pub const SWIPE_MAX_DURATION_MS: u64 = 600;

/// Left edge of the click band that opens the lightbox (relative to image width).
pub const CENTER_BAND_START: f32 = 0.30;

/// Right edge of the click band that opens the lightbox (relative to image width).
pub const CENTER_BAND_END: f32 = 0.70;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor when the lightbox opens or changes page.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum lightbox zoom factor.
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum lightbox zoom factor.
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom change for the zoom in/out buttons.
pub const DEFAULT_BUTTON_ZOOM_STEP: f32 = 0.5;

/// Zoom change per wheel event.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

/// Smallest configurable zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.05;

/// Largest configurable zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Delay before the touch page indicator hides after the finger lifts (in milliseconds).
pub const INDICATOR_HIDE_MS: u64 = 1_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Spread width as a fraction of the carousel section width.
pub const SPREAD_WIDTH_RATIO: f32 = 0.72;

/// Maximum spread width (in logical pixels).
pub const SPREAD_MAX_WIDTH: f32 = 980.0;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// URL pattern of the bundled issue; `{n}` is replaced by the 1-based page number.
pub const DEFAULT_URL_PATTERN: &str = "https://gigilpops.sirv.com/iloveimg-compressed/pg{n}.png";

/// Number of pages in the bundled issue.
pub const DEFAULT_PAGE_COUNT: usize = 17;

/// Number of full-resolution images kept decoded for the lightbox.
pub const FULL_RES_CACHE_CAPACITY: usize = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(ANIMATION_FRAME_MS < MIN_TRANSITION_MS);

    // Gesture validation
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(SWIPE_MAX_DURATION_MS > 0);
    assert!(CENTER_BAND_START > 0.0);
    assert!(CENTER_BAND_START < CENTER_BAND_END);
    assert!(CENTER_BAND_END < 1.0);

    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_BUTTON_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_BUTTON_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Layout validation
    assert!(SPREAD_WIDTH_RATIO > 0.0);
    assert!(SPREAD_WIDTH_RATIO <= 1.0);
    assert!(SPREAD_MAX_WIDTH > 0.0);

    // Page validation
    assert!(DEFAULT_PAGE_COUNT > 0);
    assert!(FULL_RES_CACHE_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_defaults_are_valid() {
        assert_eq!(DEFAULT_TRANSITION_MS, 400);
        assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
        assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(MIN_ZOOM, 0.5);
        assert_eq!(MAX_ZOOM, 4.0);
        assert!(MIN_ZOOM < DEFAULT_ZOOM && DEFAULT_ZOOM < MAX_ZOOM);
    }

    #[test]
    fn center_band_is_forty_percent_wide() {
        assert!((CENTER_BAND_END - CENTER_BAND_START - 0.4).abs() < 1e-6);
    }

    #[test]
    fn default_url_pattern_has_placeholder() {
        assert!(DEFAULT_URL_PATTERN.contains("{n}"));
    }
}
