// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Call-to-action button (cover "Read the issue").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        button::Status::Pressed => palette::ACCENT_700,
        button::Status::Active | button::Status::Disabled => palette::ACCENT_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_700,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round translucent buttons floating over a page (lightbox controls).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => 1.0,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::INK
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless text button (navbar links).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        button::Status::Active | button::Status::Disabled => palette::GRAY_200,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}
