// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the reader surfaces.
//!
//! Everything visual (colors, spacing, sizes, type scale) is read from here
//! so the cover, the carousel and the lightbox stay consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK: Color = Color::from_rgb(0.07, 0.07, 0.08);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);

    // Brand accent (magenta)
    pub const ACCENT_400: Color = Color::from_rgb(0.93, 0.36, 0.62);
    pub const ACCENT_500: Color = Color::from_rgb(0.85, 0.2, 0.5);
    pub const ACCENT_700: Color = Color::from_rgb(0.6, 0.1, 0.35);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    /// Lightbox backdrop
    pub const BACKDROP: f32 = 0.94;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const CONTROL_BUTTON: f32 = 44.0;
    pub const SPINNER: f32 = 48.0;
    pub const SPINNER_STROKE: f32 = 3.0;
    pub const ABOUT_WIDTH: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Cover headline
    pub const DISPLAY: f32 = 44.0;
    pub const TITLE_LG: f32 = 28.0;
    /// Brand in the navbar
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 15.0;
    /// Page indicator, hints
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::BACKDROP < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CONTROL_BUTTON >= 44.0);
};
