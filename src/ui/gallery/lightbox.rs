// SPDX-License-Identifier: MPL-2.0
//! Lightbox modal view: backdrop, image, info panel, counter, and the
//! prev/next navigation arrows.
//!
//! The modal is stacked above the gallery by the application view. While a
//! transition is in flight the image fades and the arrows stop accepting
//! presses; the state machine would reject re-entrant requests anyway, but
//! leaving the buttons disabled matches the visual affordance.

use super::{Message, Thumbnails};
use crate::catalog::ImageRecord;
use crate::lightbox::Direction;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    /// The selected record.
    pub record: &'a ImageRecord,
    /// Zero-based position of the selection within the visible set.
    pub position: usize,
    /// Size of the visible set.
    pub total: usize,
    /// Whether a navigation transition is in flight.
    pub transitioning: bool,
    pub thumbnails: &'a Thumbnails,
}

/// Renders the full-window lightbox overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let mut stack = Stack::new().push(backdrop).push(modal(&ctx));

    // Arrows sit outside the modal, one per screen edge. A visible set of
    // one image has nowhere to navigate, so they disappear entirely.
    if ctx.total > 1 {
        stack = stack
            .push(arrow(Direction::Previous, "◀", ctx.transitioning))
            .push(arrow(Direction::Next, "▶", ctx.transitioning));
    }

    stack = stack.push(counter(ctx.position, ctx.total)).push(close());

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn modal<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnails.get(&ctx.record.id) {
        Some(Some(handle)) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(if ctx.transitioning {
                opacity::TRANSITION_FADE
            } else {
                1.0
            })
            .width(Length::Fill)
            .height(sizing::LIGHTBOX_IMAGE_HEIGHT)
            .into(),
        Some(None) | None => icons::sized(icons::image(), sizing::ICON_XL).into(),
    };

    let picture_area = Container::new(picture)
        .width(Length::Fill)
        .height(sizing::LIGHTBOX_IMAGE_HEIGHT)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let body = Row::new()
        .push(picture_area)
        .push(info_panel(ctx.record, ctx.total));

    let panel = Container::new(body)
        .max_width(960.0)
        .style(styles::container::modal_panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn info_panel<'a>(record: &'a ImageRecord, total: usize) -> Element<'a, Message> {
    let download_label = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::download(), sizing::ICON_SM))
        .push(Text::new("Download"));

    let mut panel = Column::new()
        .spacing(spacing::MD)
        .width(sizing::LIGHTBOX_PANEL_WIDTH)
        .padding(spacing::LG)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .push(
            Text::new("File Info")
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(info_line("Filename", &record.filename))
        .push(info_line("Size", &record.size))
        .push(info_line("Date", &record.date))
        .push(
            button(download_label)
                .padding([spacing::SM, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::DownloadRequested),
        );

    if total > 1 {
        panel = panel.push(
            Text::new("Use ← → arrow keys or click arrows to navigate")
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }

    panel.into()
}

fn info_line<'a>(label: &'a str, value: &'a str) -> Text<'a> {
    Text::new(format!("{}: {}", label, value))
        .size(typography::BODY)
        .color(palette::GRAY_200)
}

fn arrow<'a>(direction: Direction, glyph: &'a str, transitioning: bool) -> Element<'a, Message> {
    let mut control = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::MD)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY,
            opacity::OVERLAY_STRONG,
        ));
    if !transitioning {
        control = control.on_press(Message::NavigateRequested(direction));
    }

    let side = match direction {
        Direction::Previous => alignment::Horizontal::Left,
        Direction::Next => alignment::Horizontal::Right,
    };

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(side)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn counter<'a>(position: usize, total: usize) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(format!("{} / {}", position + 1, total)).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::counter_badge);

    Container::new(badge)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn close<'a>() -> Element<'a, Message> {
    let control = button(Text::new("×").size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::CloseRequested);

    Container::new(control)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Right)
        .into()
}
