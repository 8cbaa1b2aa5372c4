// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, icons, widget styles, and the gallery
//! screens.

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
