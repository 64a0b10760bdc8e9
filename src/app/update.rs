// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components never fetch pages themselves: their effects come back here
//! and are turned into fetch tasks against the shared [`PageCache`].

use super::{Message, Preferences, Screen};
use crate::domain::{PageSequence, Resolution};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{FetchOutcome, Fetcher, PageCache};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::carousel::{self, Effect as CarouselEffect};
use crate::ui::cover::{self, Event as CoverEvent};
use crate::ui::lightbox::{self, Effect as LightboxEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::keyboard::{self, key};
use iced::Task;
use std::f32::consts::TAU;
use std::time::Instant;

/// Cover spinner rotation speed in radians per frame.
const COVER_SPINNER_SPEED: f32 = 0.1;

/// Mutable view over the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub preferences: &'a Preferences,
    pub pages: &'a mut PageSequence,
    pub cache: &'a mut PageCache,
    pub fetcher: &'a Fetcher,
    pub carousel: &'a mut carousel::State,
    pub lightbox: &'a mut Option<lightbox::State>,
    pub about_open: &'a mut bool,
    pub resolving: &'a mut bool,
    pub notice: &'a mut Option<String>,
    pub cover_spinner: &'a mut f32,
}

/// Plans fetches for `indices` and turns the jobs into tasks.
fn fetch(
    ctx: &mut UpdateContext<'_>,
    indices: impl IntoIterator<Item = usize>,
    resolution: Resolution,
) -> Task<Message> {
    let jobs = ctx.cache.plan(ctx.pages, indices, resolution);
    if jobs.is_empty() {
        return Task::none();
    }
    Task::batch(jobs.into_iter().map(|job| {
        Task::perform(
            ctx.fetcher.clone().fetch(job.key, job.src),
            Message::PageFetched,
        )
    }))
}

pub fn handle_pages_resolved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PageSequence, Error>,
) -> Task<Message> {
    *ctx.resolving = false;
    let pages = match result {
        Ok(pages) => pages,
        Err(err) => {
            log::warn!("Could not open magazine: {err}");
            *ctx.notice = Some(ctx.i18n.tr(err.i18n_key()));
            return Task::none();
        }
    };

    log::info!("Magazine has {} pages", pages.len());
    let count = pages.len();
    *ctx.pages = pages;
    *ctx.carousel = carousel::State::new(
        count,
        ctx.preferences.transition_duration,
        ctx.preferences.transition_style,
    );
    if *ctx.screen == Screen::Magazine {
        ctx.carousel.settle_on_mount(ctx.cache);
    }

    // Every display page is requested up front, cover first.
    fetch(ctx, 0..count, Resolution::Display)
}

pub fn handle_page_fetched(ctx: &mut UpdateContext<'_>, outcome: FetchOutcome) -> Task<Message> {
    let FetchOutcome { key, result } = outcome;
    if let Err(err) = &result {
        log::warn!("Page {} unavailable: {err}", key.index + 1);
    }
    ctx.cache.complete(key, result);
    if key.resolution == Resolution::Display {
        ctx.carousel.page_ready(key.index);
    }
    Task::none()
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    let (effect, task) = ctx.carousel.handle_message(message, ctx.cache);
    let task = task.map(Message::Carousel);

    let follow_up = match effect {
        CarouselEffect::None => Task::none(),
        CarouselEffect::OpenViewer(index) => open_lightbox(ctx, index),
        CarouselEffect::TransitionStarted(to) => fetch(ctx, [to], Resolution::Display),
        CarouselEffect::PageChanged(index) => {
            log::debug!("Carousel settled on page {}", index + 1);
            let neighbours = ctx.pages.neighbours(index);
            fetch(ctx, neighbours, Resolution::Display)
        }
    };
    Task::batch([task, follow_up])
}

fn open_lightbox(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let count = ctx.pages.len();
    if index >= count {
        return Task::none();
    }
    *ctx.lightbox = Some(lightbox::State::open(
        index,
        count,
        ctx.preferences.zoom_steps,
    ));
    fetch(ctx, [index], Resolution::Full)
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let Some(state) = ctx.lightbox.as_mut() else {
        return Task::none();
    };
    match state.handle_message(message) {
        LightboxEffect::None => Task::none(),
        LightboxEffect::Navigate(index) => fetch(ctx, [index], Resolution::Full),
        LightboxEffect::Close => {
            log::debug!("Closing lightbox");
            *ctx.lightbox = None;
            Task::none()
        }
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: &navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenAbout => *ctx.about_open = true,
        NavbarEvent::GoToCover => {
            ctx.carousel.teardown();
            *ctx.lightbox = None;
            *ctx.about_open = false;
            *ctx.screen = Screen::Cover;
        }
    }
    Task::none()
}

pub fn handle_cover_message(ctx: &mut UpdateContext<'_>, message: &cover::Message) -> Task<Message> {
    match cover::update(message) {
        CoverEvent::OpenMagazine => {
            *ctx.screen = Screen::Magazine;
            ctx.carousel.settle_on_mount(ctx.cache);
        }
    }
    Task::none()
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Close => *ctx.about_open = false,
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.cover_spinner = (*ctx.cover_spinner + COVER_SPINNER_SPEED) % TAU;
    handle_carousel_message(ctx, carousel::Message::Frame(now))
}

/// Routes an uncaptured key press to the topmost overlay.
///
/// The About panel only reacts to Escape. The carousel has no keyboard
/// surface; arrow keys only page through the lightbox.
pub fn handle_key_pressed(ctx: &mut UpdateContext<'_>, pressed: &keyboard::Key) -> Task<Message> {
    if *ctx.about_open {
        if matches!(pressed, keyboard::Key::Named(key::Named::Escape)) {
            *ctx.about_open = false;
        }
        return Task::none();
    }

    if ctx.lightbox.is_none() {
        return Task::none();
    }
    match lightbox::key_message(pressed) {
        Some(message) => handle_lightbox_message(ctx, message),
        None => Task::none(),
    }
}
