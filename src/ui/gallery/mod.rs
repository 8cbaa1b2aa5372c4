// SPDX-License-Identifier: MPL-2.0
//! Gallery screens: header, grid/list renderers, empty state, and the
//! lightbox modal.
//!
//! All views are pure functions of borrowed state and emit [`Message`]
//! values the application maps into its own message type.

pub mod empty_state;
pub mod grid;
pub mod header;
pub mod lightbox;
pub mod list;

use crate::config::ViewMode;
use crate::lightbox::Direction;
use crate::ui::design_tokens::sizing;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{image, Container};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

/// Thumbnail store keyed by record id.
///
/// Absent key: fetch still in flight. `None`: fetch or decode failed, render
/// the placeholder glyph. `Some(handle)`: ready to draw.
pub type Thumbnails = HashMap<u32, Option<image::Handle>>;

/// Messages emitted by the gallery views.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search term changed.
    SearchChanged(String),
    /// Grid/list toggle pressed.
    ViewModeSelected(ViewMode),
    /// A record was clicked in the rendered set.
    RecordSelected(u32),
    /// Close button pressed in the lightbox.
    CloseRequested,
    /// Next/previous arrow pressed in the lightbox.
    NavigateRequested(Direction),
    /// Download button pressed in the lightbox.
    DownloadRequested,
}

/// Renders a square thumbnail for `id`, or the placeholder glyph when the
/// image failed to load. The substitution is purely local to the element;
/// the record itself is unaffected.
fn thumbnail<'a>(thumbnails: &'a Thumbnails, id: u32, side: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnails.get(&id) {
        Some(Some(handle)) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Loading and failed both show the glyph; a still-loading slot just
        // has not earned a handle yet.
        Some(None) | None => icons::sized(icons::image(), sizing::ICON_XL / 2.0).into(),
    };

    Container::new(content)
        .width(side)
        .height(side)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::thumbnail_well)
        .clip(true)
        .into()
}
