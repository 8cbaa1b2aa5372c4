// SPDX-License-Identifier: MPL-2.0
//! Grid renderer: responsive rows of square thumbnails with a short caption.

use super::{thumbnail, Message, Thumbnails};
use crate::catalog::ImageRecord;
use crate::config::defaults;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::Element;

/// Renders the visible set as a grid. Each cell opens the lightbox on click.
pub fn view<'a>(visible: &'a [ImageRecord], thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG);

    for chunk in visible.chunks(defaults::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::LG);
        for record in chunk {
            row = row.push(cell(record, thumbnails));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn cell<'a>(record: &'a ImageRecord, thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    let caption = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(
            Text::new(record.size.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(thumbnail(thumbnails, record.id, sizing::GRID_THUMBNAIL))
        .push(caption);

    button(content)
        .padding(spacing::SM)
        .style(styles::button::card)
        .on_press(Message::RecordSelected(record.id))
        .into()
}
