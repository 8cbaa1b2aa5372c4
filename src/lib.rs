// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! It renders a configured list of remote images as a searchable grid or
//! list and opens a keyboard-navigable lightbox for the selected image.
//! Per-image size and date metadata comes from lightweight HTTP header
//! probes issued once at startup.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod download;
pub mod error;
pub mod lightbox;
pub mod ui;
