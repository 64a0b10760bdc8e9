// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::TransitionStyle;
use crate::domain::PageSequence;
use crate::error::Error;
use crate::media::FetchOutcome;
use crate::ui::{about, carousel, cover, lightbox, navbar};
use iced::keyboard;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    Lightbox(lightbox::Message),
    Navbar(navbar::Message),
    Cover(cover::Message),
    About(about::Message),
    /// The page source finished resolving.
    PagesResolved(Result<PageSequence, Error>),
    /// One page rendition finished fetching (or failed).
    PageFetched(FetchOutcome),
    /// Animation frame while something is moving.
    Tick(Instant),
    /// A key press no widget captured.
    KeyPressed(keyboard::Key),
}

/// Runtime flags passed in from the launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Local page bundle; takes precedence over every URL setting.
    pub pages_dir: Option<String>,
    /// Remote page URL pattern containing `{n}`.
    pub url_pattern: Option<String>,
    /// Number of pages behind the URL pattern.
    pub page_count: Option<usize>,
    /// Transition style override.
    pub transition_style: Option<TransitionStyle>,
}
