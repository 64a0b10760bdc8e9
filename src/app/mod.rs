// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the cover, the carousel
//! and the lightbox.
//!
//! The `App` struct owns the page sequence and the shared page cache, routes
//! component effects into fetch tasks, and keeps the carousel and the
//! lightbox independent of each other.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{
    self, Config, MagazineConfig, TransitionStyle, DEFAULT_BUTTON_ZOOM_STEP, DEFAULT_PAGE_COUNT,
    DEFAULT_TRANSITION_MS, DEFAULT_WHEEL_ZOOM_STEP, FULL_RES_CACHE_CAPACITY,
};
use crate::domain::PageSequence;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{Fetcher, PageCache, PageSource};
use crate::ui::carousel::{self, TransitionDuration};
use crate::ui::lightbox::{self, ZoomStep, ZoomSteps};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    preferences: Preferences,
    pages: PageSequence,
    cache: PageCache,
    fetcher: Fetcher,
    carousel: carousel::State,
    /// Present while the lightbox is open.
    lightbox: Option<lightbox::State>,
    about_open: bool,
    /// The page source is still being resolved.
    resolving: bool,
    /// Localized warning shown on the cover (config or source problems).
    notice: Option<String>,
    cover_spinner: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("pages", &self.pages.len())
            .field("current", &self.carousel.current())
            .field("lightbox", &self.lightbox.as_ref().map(lightbox::State::index))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Carousel and lightbox settings resolved from flags and config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub transition_style: TransitionStyle,
    pub transition_duration: TransitionDuration,
    pub zoom_steps: ZoomSteps,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            transition_style: TransitionStyle::default(),
            transition_duration: TransitionDuration::new(DEFAULT_TRANSITION_MS),
            zoom_steps: ZoomSteps::default(),
        }
    }
}

impl Preferences {
    /// Command-line flags win over the config file.
    #[must_use]
    pub fn resolve(flags: &Flags, config: &Config) -> Self {
        Self {
            transition_style: flags
                .transition_style
                .or(config.magazine.transition_style)
                .unwrap_or_default(),
            transition_duration: TransitionDuration::new(
                config
                    .magazine
                    .transition_ms
                    .unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            zoom_steps: ZoomSteps {
                button: ZoomStep::new(
                    config
                        .viewer
                        .button_zoom_step
                        .unwrap_or(DEFAULT_BUTTON_ZOOM_STEP),
                ),
                wheel: ZoomStep::new(
                    config
                        .viewer
                        .wheel_zoom_step
                        .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP),
                ),
            },
        }
    }
}

/// Picks the page source: a local bundle first, then a URL pattern, then
/// the built-in remote issue.
#[must_use]
pub fn page_source(flags: &Flags, magazine: &MagazineConfig) -> PageSource {
    let dir = flags
        .pages_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| magazine.pages_dir.clone());
    if let Some(dir) = dir {
        return PageSource::Directory(dir);
    }

    let pattern = flags
        .url_pattern
        .clone()
        .or_else(|| magazine.url_pattern.clone());
    let count = flags.page_count.or(magazine.page_count);
    match (pattern, count) {
        (Some(pattern), count) => PageSource::UrlPattern {
            pattern,
            count: count.unwrap_or(DEFAULT_PAGE_COUNT),
        },
        (None, Some(count)) => match PageSource::default() {
            PageSource::UrlPattern { pattern, .. } => PageSource::UrlPattern { pattern, count },
            other => other,
        },
        (None, None) => PageSource::default(),
    }
}

/// Resolves the page source on the blocking pool.
async fn resolve_pages(source: PageSource) -> Result<PageSequence> {
    tokio::task::spawn_blocking(move || source.resolve())
        .await
        .unwrap_or_else(|e| Err(Error::Source(format!("page scan failed: {e}"))))
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations, then starts resolving the page source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let preferences = Preferences::resolve(&flags, &config);
        let source = page_source(&flags, &config.magazine);
        log::info!("Opening magazine from {source:?}");

        let mut app = Self::with_preferences(i18n, preferences);
        app.notice = config_warning.map(|key| app.i18n.tr(&key));
        app.resolving = true;

        let task = Task::perform(resolve_pages(source), Message::PagesResolved);
        (app, task)
    }

    /// Creates an app with no pages yet.
    #[must_use]
    pub fn with_preferences(i18n: I18n, preferences: Preferences) -> Self {
        Self {
            i18n,
            screen: Screen::default(),
            preferences,
            pages: PageSequence::default(),
            cache: PageCache::new(FULL_RES_CACHE_CAPACITY),
            fetcher: Fetcher::new(),
            carousel: carousel::State::new(
                0,
                preferences.transition_duration,
                preferences.transition_style,
            ),
            lightbox: None,
            about_open: false,
            resolving: false,
            notice: None,
            cover_spinner: 0.0,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let total = self.pages.len();
        let current = match (&self.lightbox, self.screen) {
            (Some(lightbox), _) => Some(lightbox.index()),
            (None, Screen::Magazine) => Some(self.carousel.current()),
            (None, Screen::Cover) => None,
        };
        match current {
            Some(index) if total > 0 => format!("{}/{total} - {app_name}", index + 1),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.carousel.is_animating(),
            self.cover_is_loading(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            preferences: &self.preferences,
            pages: &mut self.pages,
            cache: &mut self.cache,
            fetcher: &self.fetcher,
            carousel: &mut self.carousel,
            lightbox: &mut self.lightbox,
            about_open: &mut self.about_open,
            resolving: &mut self.resolving,
            notice: &mut self.notice,
            cover_spinner: &mut self.cover_spinner,
        };

        match message {
            Message::Carousel(msg) => update::handle_carousel_message(&mut ctx, msg),
            Message::Lightbox(msg) => update::handle_lightbox_message(&mut ctx, msg),
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, &msg),
            Message::Cover(msg) => update::handle_cover_message(&mut ctx, &msg),
            Message::About(msg) => update::handle_about_message(&mut ctx, &msg),
            Message::PagesResolved(result) => update::handle_pages_resolved(&mut ctx, result),
            Message::PageFetched(outcome) => update::handle_page_fetched(&mut ctx, outcome),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::KeyPressed(key) => update::handle_key_pressed(&mut ctx, &key),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            cache: &self.cache,
            carousel: &self.carousel,
            lightbox: self.lightbox.as_ref(),
            about_open: self.about_open,
            notice: self.notice.as_deref(),
            cover_spinner: self.cover_spinner,
            cover_loading: self.cover_is_loading(),
        })
    }

    fn cover_is_loading(&self) -> bool {
        self.screen == Screen::Cover
            && (self.resolving || (!self.pages.is_empty() && !self.cache.is_ready(0)))
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn pages(&self) -> &PageSequence {
        &self.pages
    }

    #[must_use]
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&lightbox::State> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn is_about_open(&self) -> bool {
        self.about_open
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
