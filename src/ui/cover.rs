// SPDX-License-Identifier: MPL-2.0
//! Cover screen: the first page and a call to action opening the issue.

use crate::i18n::fluent::I18n;
use crate::media::{PageCache, Slot};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::spinner;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::{
    alignment::Horizontal,
    mouse,
    widget::{button, container, image, Column, Space, Text},
    ContentFit, Element, Length, Rectangle, Renderer, Theme,
};

/// Contextual data needed to render the cover.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a PageCache,
    /// Rotation of the loading arc; `None` once nothing is loading.
    pub spinner: Option<f32>,
    /// Localized warning to show under the call to action.
    pub notice: Option<&'a str>,
}

/// Messages emitted by the cover.
#[derive(Debug, Clone)]
pub enum Message {
    ReadIssue,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenMagazine,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ReadIssue => Event::OpenMagazine,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let artwork: Element<'_, Message> = match (ctx.cache.slot(0), ctx.spinner) {
        (Slot::Ready(page), _) => image(page.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (Slot::Failed, _) => Text::new(ctx.i18n.tr_with_args("page-unavailable", &[("page", "1")]))
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into(),
        (Slot::Pending, Some(rotation)) => Canvas::new(CoverSpinner { rotation })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (Slot::Pending, None) => Space::new().height(Length::Fill).into(),
    };

    let cta = button(Text::new(ctx.i18n.tr("cover-cta")).size(typography::BODY))
        .on_press(Message::ReadIssue)
        .style(styles::button::primary)
        .padding([spacing::XS, spacing::LG]);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("cover-headline"))
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .push(container(artwork).width(Length::Fill).height(Length::Fill))
        .push(cta);
    if let Some(notice) = ctx.notice {
        content = content.push(
            Text::new(notice)
                .size(typography::CAPTION)
                .color(palette::ACCENT_400),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::stage)
        .into()
}

struct CoverSpinner {
    rotation: f32,
}

impl canvas::Program<Message> for CoverSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        spinner::stroke_spinner(
            &mut frame,
            center,
            sizing::SPINNER / 2.0,
            self.rotation,
            palette::ACCENT_400,
        );
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_opens_magazine() {
        assert_eq!(update(&Message::ReadIssue), Event::OpenMagazine);
    }
}
