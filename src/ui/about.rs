// SPDX-License-Identifier: MPL-2.0
//! About overlay presenting the agency behind the magazine.
//!
//! Closed by its close button or by Escape (routed by the application).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, opaque, scrollable, text, Column, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Close,
}

/// Process an about overlay message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Render the about overlay.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close = button(text("×").size(typography::TITLE_LG))
        .on_press(Message::Close)
        .style(styles::button::link)
        .padding(spacing::XS);

    let headline = Text::new(ctx.i18n.tr("about-headline"))
        .size(typography::TITLE_LG)
        .color(palette::WHITE)
        .align_x(Horizontal::Center);
    let agency = Text::new(ctx.i18n.tr("about-agency"))
        .size(typography::BODY)
        .color(palette::ACCENT_400)
        .align_x(Horizontal::Center);
    let description = Text::new(ctx.i18n.tr("about-description"))
        .size(typography::BODY)
        .color(palette::GRAY_200)
        .align_x(Horizontal::Center);
    let version = Text::new(format!("v{APP_VERSION}"))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let card = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(container(close).width(Length::Fill).align_x(Horizontal::Right))
        .push(headline)
        .push(agency)
        .push(description)
        .push(version);

    let card = container(scrollable(card))
        .max_width(sizing::ABOUT_WIDTH)
        .style(styles::container::panel);

    // The backdrop swallows pointer input meant for the screen beneath.
    opaque(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::LG)
            .style(styles::container::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_message_closes() {
        assert_eq!(update(&Message::Close), Event::Close);
    }
}
