// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the magazine title and the About button.
//!
//! The title doubles as a link back to the cover.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenAbout,
    GoToCover,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenAbout,
    GoToCover,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenAbout => Event::OpenAbout,
        Message::GoToCover => Event::GoToCover,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = button(Text::new(ctx.i18n.tr("magazine-title")).size(typography::TITLE_MD))
        .on_press(Message::GoToCover)
        .style(styles::button::link)
        .padding(0);

    let about = button(Text::new(ctx.i18n.tr("navbar-about-button")).size(typography::BODY))
        .on_press(Message::OpenAbout)
        .style(styles::button::link)
        .padding(spacing::XS);

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(about);

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_button_opens_about() {
        assert_eq!(update(&Message::OpenAbout), Event::OpenAbout);
    }

    #[test]
    fn brand_returns_to_cover() {
        assert_eq!(update(&Message::GoToCover), Event::GoToCover);
    }
}
