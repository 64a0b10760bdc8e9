// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
///
/// The lightbox and the About panel are overlays drawn above the current
/// screen rather than screens of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Cover,
    Magazine,
}
