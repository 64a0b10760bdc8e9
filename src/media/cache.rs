// SPDX-License-Identifier: MPL-2.0
//! Decoded page cache shared by preloading, navigation and the lightbox.
//!
//! # Design
//!
//! - **Append-only display set**: once a page's display rendition is decoded
//!   it stays loaded for the session
//! - **LRU full resolution**: full-size renditions are large and bounded by
//!   an LRU of [`FULL_RES_CACHE_CAPACITY`] entries
//! - **Coalescing**: a page already in flight is never requested twice
//! - **Failure tracking**: pages that failed stay failed and render as a
//!   placeholder instead of being fetched again

use crate::config::FULL_RES_CACHE_CAPACITY;
use crate::domain::{PageRef, PageSequence, Resolution};
use crate::error::{Error, Result};
use crate::media::image::ImageData;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Identifies one rendition of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub index: usize,
    pub resolution: Resolution,
}

impl PageKey {
    #[must_use]
    pub fn display(index: usize) -> Self {
        Self {
            index,
            resolution: Resolution::Display,
        }
    }

    #[must_use]
    pub fn full(index: usize) -> Self {
        Self {
            index,
            resolution: Resolution::Full,
        }
    }
}

/// A fetch the caller must start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub key: PageKey,
    pub src: PageRef,
}

/// Cache activity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Fetches handed out.
    pub requested: u64,
    /// Requests absorbed because the page was loaded or in flight.
    pub coalesced: u64,
    pub loaded: u64,
    pub failed: u64,
}

/// What the carousel can show for a page right now.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Ready(&'a ImageData),
    Failed,
    Pending,
}

/// Cache of decoded pages.
pub struct PageCache {
    display: HashMap<usize, ImageData>,
    full: LruCache<usize, ImageData>,
    in_flight: HashSet<PageKey>,
    failed: HashMap<PageKey, Error>,
    stats: CacheStats,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(FULL_RES_CACHE_CAPACITY)
    }
}

impl PageCache {
    /// Creates a cache keeping at most `full_capacity` full-resolution images.
    #[must_use]
    pub fn new(full_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(full_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            display: HashMap::new(),
            full: LruCache::new(capacity),
            in_flight: HashSet::new(),
            failed: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Plans fetches for `indices` at `resolution`.
    ///
    /// Pages that are loaded, in flight or failed are skipped; returned jobs
    /// are marked in flight. Full-resolution requests for pages whose two
    /// renditions share a source are satisfied by the display rendition.
    pub fn plan(
        &mut self,
        pages: &PageSequence,
        indices: impl IntoIterator<Item = usize>,
        resolution: Resolution,
    ) -> Vec<FetchJob> {
        let mut jobs = Vec::new();
        for index in indices {
            let Some(page) = pages.get(index) else {
                continue;
            };
            let key = match resolution {
                Resolution::Full if page.full_src == page.display_src => PageKey::display(index),
                _ => PageKey {
                    index,
                    resolution,
                },
            };
            if self.is_settled(key) || self.in_flight.contains(&key) {
                self.stats.coalesced += 1;
                continue;
            }
            self.in_flight.insert(key);
            self.stats.requested += 1;
            jobs.push(FetchJob {
                key,
                src: page.source(key.resolution).clone(),
            });
        }
        jobs
    }

    /// Records the outcome of a fetch.
    pub fn complete(&mut self, key: PageKey, result: Result<ImageData>) {
        self.in_flight.remove(&key);
        match result {
            Ok(image) => {
                self.stats.loaded += 1;
                match key.resolution {
                    Resolution::Display => {
                        self.display.insert(key.index, image);
                    }
                    Resolution::Full => {
                        self.full.put(key.index, image);
                    }
                }
            }
            Err(err) => {
                self.stats.failed += 1;
                self.failed.insert(key, err);
            }
        }
    }

    fn is_settled(&self, key: PageKey) -> bool {
        if self.failed.contains_key(&key) {
            return true;
        }
        match key.resolution {
            Resolution::Display => self.display.contains_key(&key.index),
            Resolution::Full => self.full.contains(&key.index),
        }
    }

    /// Whether the display rendition of `index` is decoded.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.display.contains_key(&index)
    }

    /// Whether `index` can be shown, either as an image or as a placeholder.
    #[must_use]
    pub fn is_ready(&self, index: usize) -> bool {
        self.is_loaded(index) || self.failed.contains_key(&PageKey::display(index))
    }

    #[must_use]
    pub fn is_in_flight(&self, key: PageKey) -> bool {
        self.in_flight.contains(&key)
    }

    /// The display slot for `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Slot<'_> {
        if let Some(image) = self.display.get(&index) {
            Slot::Ready(image)
        } else if self.failed.contains_key(&PageKey::display(index)) {
            Slot::Failed
        } else {
            Slot::Pending
        }
    }

    /// Best available image for the lightbox: full resolution if decoded,
    /// otherwise the display rendition.
    #[must_use]
    pub fn best(&self, index: usize) -> Option<&ImageData> {
        self.full.peek(&index).or_else(|| self.display.get(&index))
    }

    /// The error recorded for a failed rendition.
    #[must_use]
    pub fn failure(&self, key: PageKey) -> Option<&Error> {
        self.failed.get(&key)
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("loaded", &self.display.len())
            .field("full_res", &self.full.len())
            .field("in_flight", &self.in_flight.len())
            .field("failed", &self.failed.len())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;

    fn image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0; 16])
    }

    fn remote(len: usize) -> PageSequence {
        PageSequence::new(
            (0..len)
                .map(|i| Page::single(i, PageRef::Url(format!("https://example.com/{i}.png"))))
                .collect(),
        )
    }

    fn split(len: usize) -> PageSequence {
        PageSequence::new(
            (0..len)
                .map(|i| Page {
                    index: i,
                    display_src: PageRef::Url(format!("https://example.com/{i}.jpg")),
                    full_src: PageRef::Url(format!("https://example.com/full/{i}.png")),
                })
                .collect(),
        )
    }

    #[test]
    fn concurrent_requests_for_same_page_coalesce() {
        let pages = remote(5);
        let mut cache = PageCache::default();

        let first = cache.plan(&pages, [1, 4], Resolution::Display);
        let second = cache.plan(&pages, [1, 2], Resolution::Display);

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].key, PageKey::display(2));
        assert_eq!(cache.stats().coalesced, 1);
    }

    #[test]
    fn loaded_pages_are_never_refetched() {
        let pages = remote(3);
        let mut cache = PageCache::default();
        let jobs = cache.plan(&pages, [0], Resolution::Display);
        cache.complete(jobs[0].key, Ok(image()));

        assert!(cache.is_loaded(0));
        assert!(cache.plan(&pages, [0], Resolution::Display).is_empty());
    }

    #[test]
    fn failure_is_placeholder_not_retried() {
        let pages = remote(3);
        let mut cache = PageCache::default();
        cache.plan(&pages, [2], Resolution::Display);
        cache.complete(
            PageKey::display(2),
            Err(Error::Fetch {
                page: 2,
                reason: "404".into(),
            }),
        );

        assert!(matches!(cache.slot(2), Slot::Failed));
        assert!(cache.is_ready(2));
        assert!(!cache.is_loaded(2));
        assert!(cache.failure(PageKey::display(2)).is_some());
        assert!(cache.plan(&pages, [2], Resolution::Display).is_empty());
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let pages = remote(2);
        let mut cache = PageCache::default();
        assert!(cache.plan(&pages, [7], Resolution::Display).is_empty());
    }

    #[test]
    fn full_request_with_shared_source_reuses_display() {
        let pages = remote(2);
        let mut cache = PageCache::default();
        cache.plan(&pages, [0], Resolution::Display);
        let jobs = cache.plan(&pages, [0], Resolution::Full);
        assert!(jobs.is_empty());
        assert!(cache.is_in_flight(PageKey::display(0)));
    }

    #[test]
    fn best_prefers_full_resolution() {
        let pages = split(2);
        let mut cache = PageCache::default();
        let jobs = cache.plan(&pages, [1], Resolution::Full);
        assert_eq!(jobs[0].src, PageRef::Url("https://example.com/full/1.png".into()));

        cache.complete(PageKey::display(1), Ok(image()));
        assert_eq!(cache.best(1).map(|i| i.width), Some(2));

        cache.complete(PageKey::full(1), Ok(ImageData::from_rgba(4, 4, vec![0; 64])));
        assert_eq!(cache.best(1).map(|i| i.width), Some(4));
    }

    #[test]
    fn full_resolution_is_bounded() {
        let pages = split(6);
        let mut cache = PageCache::new(2);
        for index in 0..3 {
            cache.plan(&pages, [index], Resolution::Full);
            cache.complete(PageKey::full(index), Ok(image()));
        }
        assert!(cache.best(0).is_none());
        assert!(cache.best(2).is_some());
    }

    #[test]
    fn pending_until_completed() {
        let pages = remote(2);
        let mut cache = PageCache::default();
        cache.plan(&pages, [1], Resolution::Display);
        assert!(matches!(cache.slot(1), Slot::Pending));
        assert!(!cache.is_ready(1));
    }
}
