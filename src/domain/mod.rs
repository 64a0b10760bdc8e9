// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`page`]: Magazine pages ([`Page`](page::Page), [`PageSequence`](page::PageSequence),
//!   [`Direction`](page::Direction))

pub mod page;

pub use page::{wrap_step, Direction, Page, PageRef, PageSequence, Resolution};
