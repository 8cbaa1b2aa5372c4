// SPDX-License-Identifier: MPL-2.0
//! Header bar: gallery title, visible count, search input, and the
//! grid/list view toggle.

use super::Message;
use crate::config::ViewMode;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    /// Current search term, echoed back into the input.
    pub search_term: &'a str,
    /// Number of records in the visible set.
    pub visible_count: usize,
    /// Currently selected layout.
    pub view_mode: ViewMode,
}

/// Renders the header bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Image Gallery")
        .size(typography::TITLE_XL)
        .color(palette::WHITE);
    let count = Text::new(count_line(ctx.visible_count))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let heading = Column::new().spacing(spacing::XS).push(title).push(count);

    let search = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::search(), sizing::ICON_SM))
        .push(
            text_input("Search images...", ctx.search_term)
                .on_input(Message::SearchChanged)
                .width(sizing::SEARCH_INPUT_WIDTH),
        );

    let toggle = Container::new(
        Row::new()
            .push(
                button(icons::sized(icons::grid(), sizing::ICON_SM))
                    .padding(spacing::SM)
                    .style(styles::button::toggle(ctx.view_mode == ViewMode::Grid))
                    .on_press(Message::ViewModeSelected(ViewMode::Grid)),
            )
            .push(
                button(icons::sized(icons::list(), sizing::ICON_SM))
                    .padding(spacing::SM)
                    .style(styles::button::toggle(ctx.view_mode == ViewMode::List))
                    .on_press(Message::ViewModeSelected(ViewMode::List)),
            ),
    )
    .style(styles::container::toggle_group);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(toggle);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::header_bar)
        .into()
}

fn count_line(count: usize) -> String {
    if count == 1 {
        "1 image".to_string()
    } else {
        format!("{} images", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_line_handles_singular_and_plural() {
        assert_eq!(count_line(0), "0 images");
        assert_eq!(count_line(1), "1 image");
        assert_eq!(count_line(4), "4 images");
    }
}
