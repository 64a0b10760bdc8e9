// SPDX-License-Identifier: MPL-2.0
//! Pointer routing through the rendered view: open overlays must keep
//! clicks away from the carousel stacked underneath them.

use iced::keyboard::{self, key};
use iced::{mouse, Event, Point, Rectangle, Size};
use iced_folio::app::{App, Message, Preferences};
use iced_folio::i18n::fluent::I18n;
use iced_folio::media::source::from_url_pattern;
use iced_folio::ui::{carousel, cover, navbar};
use iced_test::simulator;

const PAGES: usize = 17;

fn open_magazine() -> App {
    let mut app = App::with_preferences(I18n::default(), Preferences::default());
    let pages = from_url_pattern("https://example.com/pg{n}.png", PAGES);
    let _ = app.update(Message::PagesResolved(pages));
    let _ = app.update(Message::Cover(cover::Message::ReadIssue));
    app
}

/// Left-clicks at `position` and returns the messages the view produced.
fn click_at(app: &App, position: Point) -> Vec<Message> {
    let mut ui = simulator(app.view());
    ui.point_at(position);
    let _ = ui.simulate([
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
    ]);
    ui.into_messages().collect()
}

fn reaches_carousel(messages: &[Message]) -> bool {
    messages
        .iter()
        .any(|message| matches!(message, Message::Carousel(carousel::Message::Clicked { .. })))
}

#[test]
fn bare_carousel_receives_clicks() {
    let app = open_magazine();
    assert!(reaches_carousel(&click_at(&app, Point::new(150.0, 384.0))));
}

#[test]
fn lightbox_blocks_clicks_to_carousel() {
    let mut app = open_magazine();
    let _ = app.update(Message::Carousel(carousel::Message::Clicked {
        position: Point::new(500.0, 400.0),
        image: Rectangle::new(Point::new(300.0, 100.0), Size::new(400.0, 600.0)),
        section: Rectangle::new(Point::ORIGIN, Size::new(1000.0, 800.0)),
    }));
    for _ in 0..3 {
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(key::Named::ArrowRight)));
    }
    assert_eq!(app.lightbox().map(|viewer| viewer.index()), Some(3));

    for position in [Point::new(150.0, 384.0), Point::new(512.0, 384.0), Point::new(900.0, 384.0)] {
        let messages = click_at(&app, position);
        assert!(!reaches_carousel(&messages), "click at {position:?} leaked");
        for message in messages {
            let _ = app.update(message);
        }
    }
    assert_eq!(app.carousel().pending_page(), None);
    assert_eq!(app.lightbox().map(|viewer| viewer.index()), Some(3));
}

#[test]
fn about_panel_blocks_clicks_to_carousel() {
    let mut app = open_magazine();
    let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
    assert!(app.is_about_open());

    let messages = click_at(&app, Point::new(60.0, 700.0));
    assert!(!reaches_carousel(&messages));
}
