// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the current screen; the lightbox and the About
//! panel are stacked over everything when open.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media::PageCache;
use crate::ui::{about, carousel, cover, lightbox, navbar};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub cache: &'a PageCache,
    pub carousel: &'a carousel::State,
    pub lightbox: Option<&'a lightbox::State>,
    pub about_open: bool,
    pub notice: Option<&'a str>,
    pub cover_spinner: f32,
    pub cover_loading: bool,
}

/// Renders the current screen and any open overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext { i18n: ctx.i18n }).map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Cover => cover::view(cover::ViewContext {
            i18n: ctx.i18n,
            cache: ctx.cache,
            spinner: ctx.cover_loading.then_some(ctx.cover_spinner),
            notice: ctx.notice,
        })
        .map(Message::Cover),
        Screen::Magazine => carousel::view(carousel::ViewContext {
            state: ctx.carousel,
            cache: ctx.cache,
            i18n: ctx.i18n,
        })
        .map(Message::Carousel),
    };

    let column = Column::new().push(navbar).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column);

    if let Some(state) = ctx.lightbox {
        layers = layers.push(
            lightbox::view(lightbox::ViewContext {
                state,
                cache: ctx.cache,
                i18n: ctx.i18n,
            })
            .map(Message::Lightbox),
        );
    }

    if ctx.about_open {
        layers = layers.push(about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About));
    }

    layers.into()
}
