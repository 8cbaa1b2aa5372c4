// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action button (download).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for the grid/list view-toggle segments. The selected segment gets
/// the brand background, the other stays muted until hovered.
pub fn toggle(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        if selected {
            button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: WHITE,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        } else {
            let text_color = match status {
                button::Status::Hovered => WHITE,
                _ => palette::GRAY_400,
            };
            button::Style {
                background: Some(Background::Color(Color {
                    a: opacity::SURFACE,
                    ..WHITE
                })),
                text_color,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Style for overlay buttons (navigation arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::BORDER_STRONG,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for the invisible card button wrapping a grid cell or list row.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.5,
            ..palette::PRIMARY_500
        },
        _ => Color {
            a: opacity::BORDER,
            ..WHITE
        },
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..WHITE
        })),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selected_uses_brand_background() {
        let theme = Theme::Dark;
        let style = toggle(true)(&theme, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn toggle_unselected_brightens_on_hover() {
        let theme = Theme::Dark;
        let resting = toggle(false)(&theme, button::Status::Active);
        let hovered = toggle(false)(&theme, button::Status::Hovered);
        assert_eq!(resting.text_color, palette::GRAY_400);
        assert_eq!(hovered.text_color, WHITE);
    }

    #[test]
    fn overlay_alpha_follows_status() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, opacity::OVERLAY, opacity::OVERLAY_STRONG);

        let resting = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);
        match (resting.background, hovered.background) {
            (Some(Background::Color(r)), Some(Background::Color(h))) => assert!(r.a < h.a),
            _ => panic!("expected solid backgrounds"),
        }
    }
}
