// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when the visible set has no records.

use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state.
///
/// The hint distinguishes an empty catalog (nothing configured) from a
/// search term that matched nothing.
pub fn view<'a>(catalog_is_empty: bool) -> Element<'a, Message> {
    let hint = if catalog_is_empty {
        "Add image filenames to the gallery configuration to get started"
    } else {
        "Try adjusting your search term"
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::image(), sizing::ICON_XL))
        .push(
            Text::new("No images found")
                .size(typography::TITLE_MD)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(hint)
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
