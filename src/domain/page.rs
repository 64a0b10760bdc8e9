// SPDX-License-Identifier: MPL-2.0
//! Magazine pages and the ordered sequence they form.

use std::fmt;
use std::path::PathBuf;

/// Where the bytes of one page rendition live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRef {
    /// A file in a local page bundle.
    Path(PathBuf),
    /// A remote image.
    Url(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Path(path) => write!(f, "{}", path.display()),
            PageRef::Url(url) => f.write_str(url),
        }
    }
}

/// Which rendition of a page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Shown in the carousel and at low lightbox zoom.
    Display,
    /// Shown in the lightbox once zoomed past 1x.
    Full,
}

/// One magazine page.
///
/// `display_src` may point at a lighter variant of `full_src`; both are
/// allowed to be the same reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub display_src: PageRef,
    pub full_src: PageRef,
}

impl Page {
    /// Creates a page whose two renditions share one source.
    #[must_use]
    pub fn single(index: usize, src: PageRef) -> Self {
        Self {
            index,
            display_src: src.clone(),
            full_src: src,
        }
    }

    /// Returns the source for the requested rendition.
    #[must_use]
    pub fn source(&self, resolution: Resolution) -> &PageRef {
        match resolution {
            Resolution::Display => &self.display_src,
            Resolution::Full => &self.full_src,
        }
    }

    /// 1-based page number shown to readers.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Navigation direction through the page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Steps `index` one page in `direction`, wrapping at both ends.
///
/// Returns `None` when there are no pages.
#[must_use]
pub fn wrap_step(index: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index % len;
    Some(match direction {
        Direction::Forward => (index + 1) % len,
        Direction::Backward => (index + len - 1) % len,
    })
}

/// Ordered, fixed-length list of pages.
///
/// Page `i` always sits at position `i`; the length never changes after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSequence {
    pages: Vec<Page>,
}

impl PageSequence {
    /// Builds a sequence, renumbering pages to match their position.
    #[must_use]
    pub fn new(pages: Vec<Page>) -> Self {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| Page { index, ..page })
            .collect();
        Self { pages }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Index one step away from `index`, with wraparound.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        wrap_step(index, self.len(), direction)
    }

    /// The previous and next pages around `index`, deduplicated.
    ///
    /// Sequences of one page have no neighbours.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(2);
        for direction in [Direction::Forward, Direction::Backward] {
            if let Some(neighbour) = self.step(index, direction) {
                if neighbour != index && !out.contains(&neighbour) {
                    out.push(neighbour);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> PageSequence {
        PageSequence::new(
            (0..len)
                .map(|i| Page::single(0, PageRef::Url(format!("https://example.com/pg{}.png", i + 1))))
                .collect(),
        )
    }

    #[test]
    fn forward_from_last_wraps_to_first() {
        assert_eq!(wrap_step(16, 17, Direction::Forward), Some(0));
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        assert_eq!(wrap_step(0, 17, Direction::Backward), Some(16));
    }

    #[test]
    fn empty_sequence_has_no_step() {
        assert_eq!(wrap_step(0, 0, Direction::Forward), None);
        assert!(sequence(0).neighbours(0).is_empty());
    }

    #[test]
    fn new_renumbers_pages_by_position() {
        let seq = sequence(3);
        let indices: Vec<usize> = seq.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(seq.get(2).map(Page::number), Some(3));
    }

    #[test]
    fn neighbours_wrap_and_dedupe() {
        assert_eq!(sequence(17).neighbours(0), vec![1, 16]);
        assert_eq!(sequence(2).neighbours(0), vec![1]);
        assert!(sequence(1).neighbours(0).is_empty());
    }

    #[test]
    fn source_selects_rendition() {
        let page = Page {
            index: 0,
            display_src: PageRef::Url("small".into()),
            full_src: PageRef::Url("large".into()),
        };
        assert_eq!(page.source(Resolution::Display), &PageRef::Url("small".into()));
        assert_eq!(page.source(Resolution::Full), &PageRef::Url("large".into()));
    }
}
