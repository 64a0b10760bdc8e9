// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating navigation, gestures and page timers.
//!
//! The component owns every piece of carousel state and reports what the
//! application must react to through [`Effect`]. Page data is never owned
//! here: readiness is read from the shared [`PageCache`].

use super::click_zone::{route_click, ClickAction};
use super::navigation::{Navigation, Transition, TransitionDuration};
use super::swipe::{MoveDisposition, SwipeTracker};
use super::transition::{renderer, Layer};
use super::{indicator, loading};
use crate::config::{TransitionStyle, INDICATOR_HIDE_MS};
use crate::domain::Direction;
use crate::media::PageCache;
use crate::ui::timers::{TimerToken, Timers};
use iced::{Point, Rectangle, Task};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TimerKind {
    Commit,
    HideIndicator,
}

/// Messages emitted by the carousel surface and its timers.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary click at `position`; `image` is the rendered page box and
    /// `section` the whole carousel area, all in the same coordinates.
    Clicked {
        position: Point,
        image: Rectangle,
        section: Rectangle,
    },
    Navigate(Direction),
    TouchStarted(Point),
    TouchEnded(Point),
    TouchLost,
    CursorMoved(Option<Point>),
    TransitionElapsed(TimerToken),
    IndicatorElapsed(TimerToken),
    Frame(Instant),
}

/// Side effects the application must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the lightbox on this page.
    OpenViewer(usize),
    /// A transition toward this page started.
    TransitionStarted(usize),
    /// The current page changed.
    PageChanged(usize),
}

/// Carousel state.
#[derive(Debug)]
pub struct State {
    navigation: Navigation,
    duration: TransitionDuration,
    style: TransitionStyle,
    swipe: SwipeTracker,
    indicator: indicator::State,
    loading: loading::State,
    timers: Timers<TimerKind>,
    started_at: Option<Instant>,
    now: Instant,
    hover: Option<Point>,
}

impl State {
    #[must_use]
    pub fn new(page_count: usize, duration: TransitionDuration, style: TransitionStyle) -> Self {
        Self {
            navigation: Navigation::new(page_count),
            duration,
            style,
            swipe: SwipeTracker::default(),
            indicator: indicator::State::default(),
            loading: loading::State::default(),
            timers: Timers::new(),
            started_at: None,
            now: Instant::now(),
            hover: None,
        }
    }

    pub fn handle_message(&mut self, message: Message, cache: &PageCache) -> (Effect, Task<Message>) {
        match message {
            Message::Clicked {
                position,
                image,
                section,
            } => {
                if self.navigation.is_transitioning() || self.navigation.page_count() == 0 {
                    return (Effect::None, Task::none());
                }
                match route_click(position, image, section) {
                    ClickAction::OpenViewer => {
                        (Effect::OpenViewer(self.navigation.current()), Task::none())
                    }
                    ClickAction::Navigate(direction) => self.start_transition(direction),
                }
            }
            Message::Navigate(direction) => self.start_transition(direction),
            Message::TouchStarted(position) => {
                self.swipe.begin(position);
                let task = self.apply_indicator(indicator::Message::TouchStarted);
                (Effect::None, task)
            }
            Message::TouchEnded(position) => {
                let swipe = self.swipe.end(position);
                let hide = self.apply_indicator(indicator::Message::TouchEnded);
                match swipe {
                    Some(direction) => {
                        let (effect, task) = self.start_transition(direction);
                        (effect, Task::batch([hide, task]))
                    }
                    None => (Effect::None, hide),
                }
            }
            Message::TouchLost => {
                self.swipe.cancel();
                let hide = self.apply_indicator(indicator::Message::TouchEnded);
                (Effect::None, hide)
            }
            Message::CursorMoved(position) => {
                self.hover = position;
                (Effect::None, Task::none())
            }
            Message::TransitionElapsed(token) => {
                if !self.timers.fire(TimerKind::Commit, token) {
                    return (Effect::None, Task::none());
                }
                self.started_at = None;
                match self.navigation.commit() {
                    Some(current) => {
                        self.settle(current, cache);
                        (Effect::PageChanged(current), Task::none())
                    }
                    None => (Effect::None, Task::none()),
                }
            }
            Message::IndicatorElapsed(token) => {
                if self.timers.fire(TimerKind::HideIndicator, token) {
                    self.indicator.handle(indicator::Message::HideElapsed);
                }
                (Effect::None, Task::none())
            }
            Message::Frame(now) => {
                self.now = now;
                self.loading.handle(loading::Message::SpinnerTick);
                (Effect::None, Task::none())
            }
        }
    }

    fn start_transition(&mut self, direction: Direction) -> (Effect, Task<Message>) {
        let Some(transition) = self.navigation.navigate(direction) else {
            return (Effect::None, Task::none());
        };
        log::debug!(
            "Turning from page {} to page {}",
            transition.from + 1,
            transition.to + 1
        );
        self.loading.handle(loading::Message::TransitionStarted);
        let now = Instant::now();
        self.started_at = Some(now);
        self.now = now;
        let task = self.timers.schedule(
            TimerKind::Commit,
            self.duration.as_duration(),
            Message::TransitionElapsed,
        );
        (Effect::TransitionStarted(transition.to), task)
    }

    fn apply_indicator(&mut self, message: indicator::Message) -> Task<Message> {
        match self.indicator.handle(message) {
            indicator::Effect::CancelHide => {
                self.timers.cancel(TimerKind::HideIndicator);
                Task::none()
            }
            indicator::Effect::ScheduleHide => self.timers.schedule(
                TimerKind::HideIndicator,
                Duration::from_millis(INDICATOR_HIDE_MS),
                Message::IndicatorElapsed,
            ),
            indicator::Effect::None => Task::none(),
        }
    }

    fn settle(&mut self, page: usize, cache: &PageCache) {
        let ready = cache.is_ready(page);
        self.loading.handle(loading::Message::Settled { page, ready });
    }

    /// Evaluates the loading latch for the page shown when the carousel mounts.
    pub fn settle_on_mount(&mut self, cache: &PageCache) {
        if self.navigation.page_count() > 0 && !self.navigation.is_transitioning() {
            self.settle(self.navigation.current(), cache);
        }
    }

    /// Notifies the component that a page finished loading (or failed).
    pub fn page_ready(&mut self, page: usize) {
        if self.loading.handle(loading::Message::PageReady(page)) == loading::Effect::Released {
            log::debug!("Page {} ready, releasing loading overlay", page + 1);
        }
    }

    /// Drops pending timers and any in-flight transition.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.swipe.cancel();
        if let Some(transition) = self.navigation.abandon() {
            log::debug!("Abandoning transition toward page {}", transition.to + 1);
        }
        self.started_at = None;
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.navigation.current()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.navigation.page_count()
    }

    #[must_use]
    pub fn pending_page(&self) -> Option<usize> {
        self.navigation.pending_page()
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.navigation.transition()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigation.is_transitioning()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_latched()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.loading.spinner_rotation()
    }

    #[must_use]
    pub fn indicator_visible(&self) -> bool {
        self.indicator.is_visible()
    }

    /// Whether frame ticks are needed to animate the surface.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_transitioning() || self.is_loading()
    }

    #[must_use]
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Capture decision for a touch move in progress.
    #[must_use]
    pub fn touch_moved(&self, position: Point) -> MoveDisposition {
        self.swipe.moved(position)
    }

    /// Transition progress in `[0, 1]`; 0 when idle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let elapsed = self.now.saturating_duration_since(started_at).as_millis() as f32;
        (elapsed / self.duration.millis() as f32).clamp(0.0, 1.0)
    }

    /// Pages to draw, bottom first.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer> {
        match self.navigation.transition() {
            Some(transition) => renderer(self.style).layers(transition, self.progress()),
            None if self.page_count() > 0 => vec![Layer::settled(self.current())],
            None => Vec::new(),
        }
    }

    /// Token of the pending commit, for hosts that drive timers themselves.
    #[must_use]
    pub fn pending_commit(&self) -> Option<TimerToken> {
        self.timers.token(TimerKind::Commit)
    }

    /// Token of the pending indicator hide.
    #[must_use]
    pub fn pending_indicator_hide(&self) -> Option<TimerToken> {
        self.timers.token(TimerKind::HideIndicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::{ImageData, PageKey};
    use iced::Size;

    fn carousel(count: usize) -> State {
        State::new(count, TransitionDuration::default(), TransitionStyle::Crossfade)
    }

    fn cache_with_ready(pages: &[usize]) -> PageCache {
        let mut cache = PageCache::default();
        for &index in pages {
            cache.complete(
                PageKey::display(index),
                Ok(ImageData::from_rgba(1, 1, vec![0; 4])),
            );
        }
        cache
    }

    fn section() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1000.0, 800.0))
    }

    fn image() -> Rectangle {
        Rectangle::new(Point::new(200.0, 0.0), Size::new(600.0, 800.0))
    }

    fn click(x: f32) -> Message {
        Message::Clicked {
            position: Point::new(x, 400.0),
            image: image(),
            section: section(),
        }
    }

    fn commit(state: &mut State, cache: &PageCache) -> Effect {
        let token = state.pending_commit().expect("commit pending");
        state.handle_message(Message::TransitionElapsed(token), cache).0
    }

    #[test]
    fn center_click_opens_viewer_on_current_page() {
        let mut state = carousel(17);
        let (effect, _) = state.handle_message(click(500.0), &PageCache::default());
        assert_eq!(effect, Effect::OpenViewer(0));
    }

    #[test]
    fn right_click_zone_starts_forward_transition() {
        let mut state = carousel(17);
        let (effect, _) = state.handle_message(click(900.0), &PageCache::default());
        assert_eq!(effect, Effect::TransitionStarted(1));
        assert_eq!(state.pending_page(), Some(1));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn left_click_zone_wraps_backward() {
        let mut state = carousel(17);
        let (effect, _) = state.handle_message(click(50.0), &PageCache::default());
        assert_eq!(effect, Effect::TransitionStarted(16));
    }

    #[test]
    fn clicks_are_ignored_while_transitioning() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(click(900.0), &cache);
        let (effect, _) = state.handle_message(click(500.0), &cache);
        assert_eq!(effect, Effect::None);
        let (effect, _) = state.handle_message(click(900.0), &cache);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn navigation_during_transition_is_dropped() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        let (effect, _) = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.pending_page(), Some(1));
    }

    #[test]
    fn commit_changes_page_and_reports_it() {
        let mut state = carousel(17);
        let cache = cache_with_ready(&[1]);
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        assert_eq!(commit(&mut state, &cache), Effect::PageChanged(1));
        assert_eq!(state.current(), 1);
        assert!(!state.is_transitioning());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_commit_token_is_ignored() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        let token = state.pending_commit().expect("pending");
        state.teardown();
        let (effect, _) = state.handle_message(Message::TransitionElapsed(token), &cache);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn commit_onto_unloaded_page_engages_latch_until_ready() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        let _ = commit(&mut state, &cache);
        assert!(state.is_loading());
        assert!(state.is_animating());

        state.page_ready(5);
        assert!(state.is_loading());
        state.page_ready(1);
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_page_counts_as_ready() {
        let mut state = carousel(3);
        let mut cache = PageCache::default();
        cache.complete(
            PageKey::display(1),
            Err(Error::Fetch {
                page: 1,
                reason: "404".into(),
            }),
        );
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        let _ = commit(&mut state, &cache);
        assert!(!state.is_loading());
    }

    #[test]
    fn settle_on_mount_latches_unloaded_first_page() {
        let mut state = carousel(4);
        state.settle_on_mount(&PageCache::default());
        assert!(state.is_loading());

        let mut state = carousel(4);
        state.settle_on_mount(&cache_with_ready(&[0]));
        assert!(!state.is_loading());
    }

    #[test]
    fn new_transition_releases_latch() {
        let mut state = carousel(4);
        let cache = PageCache::default();
        state.settle_on_mount(&cache);
        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        assert!(!state.is_loading());
    }

    #[test]
    fn swipe_left_navigates_forward() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::TouchStarted(Point::new(400.0, 300.0)), &cache);
        assert!(state.indicator_visible());
        let (effect, _) = state.handle_message(Message::TouchEnded(Point::new(320.0, 310.0)), &cache);
        assert_eq!(effect, Effect::TransitionStarted(1));
        assert!(state.pending_indicator_hide().is_some());
    }

    #[test]
    fn short_swipe_does_not_navigate() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::TouchStarted(Point::new(400.0, 300.0)), &cache);
        let (effect, _) = state.handle_message(Message::TouchEnded(Point::new(350.0, 300.0)), &cache);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn indicator_hides_after_timer_and_touch_cancels_hide() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        let _ = state.handle_message(Message::TouchStarted(Point::ORIGIN), &cache);
        let _ = state.handle_message(Message::TouchEnded(Point::ORIGIN), &cache);
        let stale = state.pending_indicator_hide().expect("hide pending");

        let _ = state.handle_message(Message::TouchStarted(Point::ORIGIN), &cache);
        assert!(state.pending_indicator_hide().is_none());
        let _ = state.handle_message(Message::IndicatorElapsed(stale), &cache);
        assert!(state.indicator_visible());

        let _ = state.handle_message(Message::TouchEnded(Point::ORIGIN), &cache);
        let token = state.pending_indicator_hide().expect("hide pending");
        let _ = state.handle_message(Message::IndicatorElapsed(token), &cache);
        assert!(!state.indicator_visible());
    }

    #[test]
    fn horizontal_touch_move_is_captured() {
        let mut state = carousel(17);
        let _ = state.handle_message(
            Message::TouchStarted(Point::new(100.0, 100.0)),
            &PageCache::default(),
        );
        assert_eq!(state.touch_moved(Point::new(140.0, 110.0)), MoveDisposition::Capture);
        assert_eq!(
            state.touch_moved(Point::new(105.0, 160.0)),
            MoveDisposition::PassThrough
        );
    }

    #[test]
    fn layers_follow_transition_progress() {
        let mut state = carousel(17);
        let cache = PageCache::default();
        assert_eq!(state.layers(), vec![Layer::settled(0)]);

        let _ = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        let started = state.started_at.expect("started");
        let _ = state.handle_message(Message::Frame(started + Duration::from_millis(800)), &cache);
        assert!((state.progress() - 1.0).abs() < f32::EPSILON);
        let layers = state.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[1].page, 1);
    }

    #[test]
    fn empty_carousel_has_no_layers_and_ignores_clicks() {
        let mut state = carousel(0);
        assert!(state.layers().is_empty());
        let (effect, _) = state.handle_message(click(500.0), &PageCache::default());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn single_page_carousel_still_transitions_onto_itself() {
        let mut state = carousel(1);
        let cache = cache_with_ready(&[0]);
        let (effect, _) = state.handle_message(Message::Navigate(Direction::Forward), &cache);
        assert_eq!(effect, Effect::TransitionStarted(0));
        assert_eq!(commit(&mut state, &cache), Effect::PageChanged(0));
    }
}
