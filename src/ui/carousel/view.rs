// SPDX-License-Identifier: MPL-2.0
//! Canvas surface of the carousel.
//!
//! The surface draws the layers of the current transition and turns pointer
//! and touch input into component messages. Horizontal touch moves are
//! captured so the surrounding page does not scroll while swiping.

use super::component::{Message, State};
use super::geometry;
use super::swipe::MoveDisposition;
use crate::i18n::fluent::I18n;
use crate::media::{PageCache, Slot};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::widgets::{page_image, spinner};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, touch, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Everything the surface needs to render one frame.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub cache: &'a PageCache,
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(Surface { ctx })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct Surface<'a> {
    ctx: ViewContext<'a>,
}

impl Surface<'_> {
    fn counter_label(&self) -> String {
        let current = (self.ctx.state.current() + 1).to_string();
        let total = self.ctx.state.page_count().to_string();
        self.ctx.i18n.tr_with_args(
            "page-indicator",
            &[("current", current.as_str()), ("total", total.as_str())],
        )
    }

    /// Rendered box of the current page, used for click routing.
    fn current_image_bounds(&self, section: Rectangle) -> Rectangle {
        let size = match self.ctx.cache.slot(self.ctx.state.current()) {
            Slot::Ready(image) => Some(page_image::natural_size(image)),
            Slot::Failed | Slot::Pending => None,
        };
        geometry::page_bounds(section, size)
    }

    fn draw_pages(&self, frame: &mut Frame, section: Rectangle) {
        let spread = geometry::spread_bounds(section);
        for layer in self.ctx.state.layers() {
            let shift = Vector::new(layer.offset * spread.width, 0.0);
            match self.ctx.cache.slot(layer.page) {
                Slot::Ready(image) => {
                    let bounds =
                        geometry::page_bounds(section, Some(page_image::natural_size(image)));
                    page_image::draw(frame, image, bounds + shift, layer.opacity);
                }
                Slot::Failed => {
                    let bounds = spread + shift;
                    frame.fill(
                        &Path::rounded_rectangle(
                            bounds.position(),
                            bounds.size(),
                            radius::MD.into(),
                        ),
                        Color {
                            a: layer.opacity,
                            ..palette::GRAY_800
                        },
                    );
                    let page = (layer.page + 1).to_string();
                    let label = self
                        .ctx
                        .i18n
                        .tr_with_args("page-unavailable", &[("page", page.as_str())]);
                    let color = Color {
                        a: layer.opacity,
                        ..palette::GRAY_200
                    };
                    centered_text(frame, label, bounds.center(), typography::BODY, color);
                }
                Slot::Pending => {}
            }
        }
    }

    fn draw_badge(frame: &mut Frame, label: String, anchor: Point) {
        let width = text_width(&label, typography::CAPTION) + spacing::MD;
        let height = typography::CAPTION + spacing::XS;
        let origin = Point::new(anchor.x - width / 2.0, anchor.y - height / 2.0);
        frame.fill(
            &Path::rounded_rectangle(origin, Size::new(width, height), radius::FULL.into()),
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::INK
            },
        );
        centered_text(frame, label, anchor, typography::CAPTION, palette::WHITE);
    }
}

/// Rough advance width of `content`; canvas text has no measuring API.
#[allow(clippy::cast_precision_loss)]
fn text_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * 0.55
}

fn centered_text(frame: &mut Frame, content: String, center: Point, size: f32, color: Color) {
    let position = Point::new(
        center.x - text_width(&content, size) / 2.0,
        center.y - size * 0.6,
    );
    frame.fill_text(Text {
        content,
        position,
        color,
        size: size.into(),
        ..Text::default()
    });
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
        let section = Rectangle::with_size(bounds.size());
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Clicked {
                        position,
                        image: self.current_image_bounds(section),
                        section,
                    })
                    .and_capture(),
                )
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hover = cursor.position_in(bounds);
                (hover != self.ctx.state.hover())
                    .then(|| Action::publish(Message::CursorMoved(hover)))
            }
            Event::Mouse(mouse::Event::CursorLeft) => self
                .ctx
                .state
                .hover()
                .map(|_| Action::publish(Message::CursorMoved(None))),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => bounds
                .contains(*position)
                .then(|| Action::publish(Message::TouchStarted(relative(*position, bounds)))),
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                match self.ctx.state.touch_moved(relative(*position, bounds)) {
                    MoveDisposition::Capture => Some(Action::capture()),
                    MoveDisposition::PassThrough => None,
                }
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(
                Action::publish(Message::TouchEnded(relative(*position, bounds))),
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
        let section = Rectangle::with_size(bounds.size());
        let carousel = self.ctx.state;

        self.draw_pages(&mut frame, section);

        if carousel.is_loading() {
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::INK
                },
            );
            spinner::stroke_spinner(
                &mut frame,
                section.center(),
                sizing::SPINNER / 2.0,
                carousel.spinner_rotation(),
                palette::ACCENT_400,
            );
        }

        if carousel.page_count() > 0 {
            if carousel.indicator_visible() {
                let anchor = Point::new(section.center_x(), section.height - spacing::XL);
                Self::draw_badge(&mut frame, self.counter_label(), anchor);
            }
            if let Some(hover) = carousel.hover() {
                let anchor = Point::new(hover.x, hover.y + spacing::LG);
                Self::draw_badge(&mut frame, self.counter_label(), anchor);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) && !self.ctx.state.is_transitioning() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
