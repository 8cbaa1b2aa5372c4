// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_800, GRAY_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header bar across the top of the main screen.
pub fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.2, ..BLACK })),
        border: Border {
            color: Color {
                a: opacity::BORDER,
                ..WHITE
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the lightbox modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Bordered surface of the lightbox modal.
pub fn modal_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        border: Border {
            color: Color {
                a: opacity::BORDER_STRONG,
                ..WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Pill badge used for the image counter inside the modal.
pub fn counter_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Flat surface behind thumbnails and placeholder glyphs.
pub fn thumbnail_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_800)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Segmented background behind the view-toggle buttons.
pub fn toggle_group(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER_STRONG,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
