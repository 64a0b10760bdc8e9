// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a paginated digital magazine viewer built with the Iced GUI
//! framework.
//!
//! Pages are shown one spread at a time in an animated carousel; clicking the
//! middle of a page opens it in a zoomable lightbox. Pages come from a local
//! bundle directory or a remote URL pattern and are fetched asynchronously.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
