// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the header plus the grid/list content, and stacks the lightbox
//! modal above everything while a selection is active.

use super::{App, Message};
use crate::config::ViewMode;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, empty_state, grid, header, lightbox, list};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    if app.loading {
        return loading_view();
    }

    let header = header::view(header::ViewContext {
        search_term: &app.search_term,
        visible_count: app.visible.len(),
        view_mode: app.view_mode,
    })
    .map(Message::Gallery);

    let content: Element<'_, gallery::Message> = if app.visible.is_empty() {
        empty_state::view(app.catalog.is_empty())
    } else {
        let rendered = match app.view_mode {
            ViewMode::Grid => grid::view(&app.visible, &app.thumbnails),
            ViewMode::List => list::view(&app.visible, &app.thumbnails),
        };
        scrollable(
            Container::new(rendered)
                .width(Length::Fill)
                .padding([spacing::LG, spacing::XL]),
        )
        .height(Length::Fill)
        .into()
    };

    let base = Column::new()
        .push(header)
        .push(content.map(Message::Gallery));

    match app.selected_record() {
        Some((position, record)) => Stack::new()
            .push(base)
            .push(
                lightbox::view(lightbox::ViewContext {
                    record,
                    position,
                    total: app.visible.len(),
                    transitioning: app.lightbox.is_transitioning(),
                    thumbnails: &app.thumbnails,
                })
                .map(Message::Gallery),
            )
            .into(),
        None => base.into(),
    }
}

fn loading_view<'a>() -> Element<'a, Message> {
    Container::new(
        Text::new("Loading images...")
            .size(typography::TITLE_MD)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
