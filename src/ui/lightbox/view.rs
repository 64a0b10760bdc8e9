// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering: the zoomable page surface and its floating controls.

use super::component::{Message, State};
use super::zoom;
use crate::i18n::fluent::I18n;
use crate::media::{PageCache, PageKey};
use crate::ui::carousel::geometry::contain_fit;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::page_image;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::widget::{button, container, opaque, row, stack, text, Action};
use iced::{mouse, touch, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Margin kept around a fitted page.
const FIT_MARGIN: f32 = spacing::XL;

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub cache: &'a PageCache,
    pub i18n: &'a I18n,
}

/// Where the page is drawn: fitted into `viewport`, scaled about the
/// viewport center by `zoom`, then translated by `pan`.
#[must_use]
pub fn page_rect(viewport: Rectangle, image: Size, zoom: f32, pan: Vector) -> Rectangle {
    let inner = Rectangle {
        x: viewport.x + FIT_MARGIN,
        y: viewport.y + FIT_MARGIN,
        width: (viewport.width - 2.0 * FIT_MARGIN).max(1.0),
        height: (viewport.height - 2.0 * FIT_MARGIN).max(1.0),
    };
    let fitted = contain_fit(image, inner);
    let size = Size::new(fitted.width * zoom, fitted.height * zoom);
    let center = viewport.center() + pan;
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;

    let surface = container(
        Canvas::new(Surface { ctx })
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::backdrop);

    let close = container(control("×", Some(Message::Close)))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD);

    let level = state.zoom();
    let zoom_label = container(text(format!("{:.0}%", level.value() * 100.0)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::pill);
    let controls = row![
        control("‹", Some(Message::Previous)),
        control(
            "−",
            (!level.is_min()).then_some(Message::Zoom(zoom::Message::ZoomOut))
        ),
        zoom_label,
        control(
            "+",
            (!level.is_max()).then_some(Message::Zoom(zoom::Message::ZoomIn))
        ),
        control(
            "1:1",
            (!level.is_fitted()).then_some(Message::Zoom(zoom::Message::Reset))
        ),
        control("›", Some(Message::Next)),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);
    let controls = container(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG);

    let mut layers = stack![surface, controls, close];
    if state.shows_swipe_hint() {
        let hint = container(
            container(text(i18n.tr("lightbox-swipe-hint")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::pill),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG);
        layers = layers.push(hint);
    }
    // Modal: clicks on the backdrop or a fitted page must not reach the carousel.
    opaque(layers.width(Length::Fill).height(Length::Fill))
}

fn control(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(
        text(label)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL_BUTTON))
    .height(Length::Fixed(sizing::CONTROL_BUTTON))
    .padding(0)
    .style(styles::button::overlay)
    .on_press_maybe(on_press)
    .into()
}

struct Surface<'a> {
    ctx: ViewContext<'a>,
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let lightbox = self.ctx.state;
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                lightbox
                    .zoom()
                    .is_magnified()
                    .then(|| Action::publish(Message::PointerPressed(position)).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => lightbox
                .is_dragging()
                .then(|| Action::publish(Message::PointerMoved(relative(*position, bounds)))),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => lightbox
                .is_dragging()
                .then(|| Action::publish(Message::PointerReleased)),
            Event::Mouse(mouse::Event::CursorLeft) => lightbox
                .is_dragging()
                .then(|| Action::publish(Message::PointerLeft)),
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => {
                        *y
                    }
                };
                Some(Action::publish(Message::Zoom(zoom::Message::Wheel(y))).and_capture())
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                bounds.contains(*position).then(|| {
                    Action::publish(Message::TouchStarted(relative(*position, bounds)))
                        .and_capture()
                })
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => Some(
                Action::publish(Message::TouchMoved(relative(*position, bounds))).and_capture(),
            ),
            Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(
                Action::publish(Message::TouchEnded(relative(*position, bounds))).and_capture(),
            ),
            Event::Touch(touch::Event::FingerLost { .. }) => {
                Some(Action::publish(Message::TouchLost))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = Rectangle::with_size(bounds.size());
        let lightbox = self.ctx.state;
        let index = lightbox.index();

        if let Some(image) = self.ctx.cache.best(index) {
            let rect = page_rect(
                viewport,
                page_image::natural_size(image),
                lightbox.zoom().value(),
                lightbox.pan(),
            );
            page_image::draw(&mut frame, image, rect, 1.0);
        } else {
            let page = (index + 1).to_string();
            let key = if self.ctx.cache.failure(PageKey::display(index)).is_some() {
                "page-unavailable"
            } else {
                "lightbox-loading"
            };
            let content = self.ctx.i18n.tr_with_args(key, &[("page", page.as_str())]);
            frame.fill_text(Text {
                content,
                position: Point::new(spacing::XL, viewport.center_y()),
                color: palette::GRAY_200,
                size: typography::BODY.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let lightbox = self.ctx.state;
        if lightbox.is_dragging() {
            mouse::Interaction::Grabbing
        } else if lightbox.zoom().is_magnified() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
