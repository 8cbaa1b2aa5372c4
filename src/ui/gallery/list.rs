// SPDX-License-Identifier: MPL-2.0
//! List renderer: vertical rows with thumbnail and full metadata.

use super::{thumbnail, Message, Thumbnails};
use crate::catalog::ImageRecord;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Renders the visible set as a list. Each row opens the lightbox on click.
pub fn view<'a>(visible: &'a [ImageRecord], thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);
    for record in visible {
        rows = rows.push(row(record, thumbnails));
    }
    rows.into()
}

fn row<'a>(record: &'a ImageRecord, thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(detail_line("Filename", &record.filename))
        .push(detail_line("Size", &record.size))
        .push(detail_line("Date", &record.date));

    let content = Row::new()
        .spacing(spacing::MD)
        .push(thumbnail(thumbnails, record.id, sizing::LIST_THUMBNAIL))
        .push(details);

    button(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::button::card)
        .on_press(Message::RecordSelected(record.id))
        .into()
}

fn detail_line<'a>(label: &'a str, value: &'a str) -> Text<'a> {
    Text::new(format!("{}: {}", label, value))
        .size(typography::BODY)
        .color(palette::GRAY_400)
}
