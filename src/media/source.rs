// SPDX-License-Identifier: MPL-2.0
//! Page source resolution.
//!
//! A magazine is either a local bundle (a directory of page images) or a
//! remote URL pattern with a known page count. Both resolve to a fixed
//! [`PageSequence`].
//!
//! In a local bundle, pages are ordered by the numbers in their file names
//! (`pg2.png` before `pg10.png`). If the bundle has a `full/` subdirectory,
//! a file of the same name there becomes that page's full-resolution source.

use crate::config::DEFAULT_URL_PATTERN;
use crate::domain::{Page, PageRef, PageSequence};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the 1-based page number in URL patterns.
pub const PAGE_NUMBER_PLACEHOLDER: &str = "{n}";

/// Subdirectory of a local bundle holding full-resolution renditions.
pub const FULL_RES_SUBDIR: &str = "full";

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Where the pages of the magazine come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// A directory of page images.
    Directory(PathBuf),
    /// Remote pages `pattern` with `{n}` = 1..=count.
    UrlPattern { pattern: String, count: usize },
}

impl Default for PageSource {
    fn default() -> Self {
        PageSource::UrlPattern {
            pattern: DEFAULT_URL_PATTERN.to_string(),
            count: crate::config::DEFAULT_PAGE_COUNT,
        }
    }
}

impl PageSource {
    /// Resolves the source into its page sequence.
    pub fn resolve(&self) -> Result<PageSequence> {
        match self {
            PageSource::Directory(dir) => scan_bundle(dir),
            PageSource::UrlPattern { pattern, count } => from_url_pattern(pattern, *count),
        }
    }
}

/// Expands a URL pattern into `count` pages.
pub fn from_url_pattern(pattern: &str, count: usize) -> Result<PageSequence> {
    if !pattern.contains(PAGE_NUMBER_PLACEHOLDER) {
        return Err(Error::Source(format!(
            "URL pattern has no {PAGE_NUMBER_PLACEHOLDER} placeholder: {pattern}"
        )));
    }
    let pages = (1..=count)
        .map(|number| {
            let url = pattern.replace(PAGE_NUMBER_PLACEHOLDER, &number.to_string());
            Page::single(number - 1, PageRef::Url(url))
        })
        .collect();
    Ok(PageSequence::new(pages))
}

/// Scans a local bundle directory.
pub fn scan_bundle(dir: &Path) -> Result<PageSequence> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::Source(format!(
            "no page images found in {}",
            dir.display()
        )));
    }

    files.sort_by(|a, b| natural_cmp(file_name(a), file_name(b)));

    let full_dir = dir.join(FULL_RES_SUBDIR);
    let pages = files
        .into_iter()
        .enumerate()
        .map(|(index, display)| {
            let full = full_dir.join(file_name(&display));
            let full_src = if full.is_file() {
                PageRef::Path(full)
            } else {
                PageRef::Path(display.clone())
            };
            Page {
                index,
                display_src: PageRef::Path(display),
                full_src,
            }
        })
        .collect();

    let sequence = PageSequence::new(pages);
    log::debug!("Found {} pages in {}", sequence.len(), dir.display());
    Ok(sequence)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Compares names so that embedded numbers sort numerically.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) if ac.is_ascii_digit() && bc.is_ascii_digit() => {
                let a_num = take_number(&mut a_chars);
                let b_num = take_number(&mut b_chars);
                match a_num.cmp(&b_num) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(ac), Some(bc)) => {
                match ac.to_ascii_lowercase().cmp(&bc.to_ascii_lowercase()) {
                    Ordering::Equal => {
                        a_chars.next();
                        b_chars.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}
