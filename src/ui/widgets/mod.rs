// SPDX-License-Identifier: MPL-2.0
pub mod page_image;
pub mod spinner;
