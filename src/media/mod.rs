// SPDX-License-Identifier: MPL-2.0
//! Page media: resolving the page source, fetching, decoding and caching.

pub mod cache;
pub mod fetch;
pub mod image;
pub mod source;

pub use cache::{FetchJob, PageCache, PageKey, Slot};
pub use fetch::{FetchOutcome, Fetcher};
pub use image::ImageData;
pub use source::PageSource;
