// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{palette, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.2);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.65);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);

    // Brand colors (purple scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.78, 0.68, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.65, 0.55, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.55, 0.36, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.45, 0.28, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.36, 0.22, 0.65);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Backdrop behind the lightbox modal.
    pub const BACKDROP: f32 = 0.8;
    /// Resting background of overlay buttons (arrows, close).
    pub const OVERLAY: f32 = 0.5;
    /// Hovered background of overlay buttons.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Pressed background of overlay buttons.
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Translucent card surfaces on the main screen.
    pub const SURFACE: f32 = 0.05;
    /// Hairline borders on cards and panels.
    pub const BORDER: f32 = 0.1;
    /// Stronger borders on the modal panel.
    pub const BORDER_STRONG: f32 = 0.2;
    /// Image opacity while a lightbox transition is in flight.
    pub const TRANSITION_FADE: f32 = 0.3;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 64.0;

    /// Edge length of a square grid thumbnail.
    pub const GRID_THUMBNAIL: f32 = 200.0;
    /// Edge length of a square list-row thumbnail.
    pub const LIST_THUMBNAIL: f32 = 96.0;
    /// Width of the lightbox info panel.
    pub const LIGHTBOX_PANEL_WIDTH: f32 = 320.0;
    /// Maximum height of the lightbox image area.
    pub const LIGHTBOX_IMAGE_HEIGHT: f32 = 560.0;
    /// Width of the search input.
    pub const SEARCH_INPUT_WIDTH: f32 = 256.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_LG: f32 = 24.0;
    pub const TITLE_XL: f32 = 30.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Fully round, for circular buttons and pill badges.
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_doubles_from_xs() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn overlay_opacities_are_ordered() {
        assert!(opacity::OVERLAY < opacity::OVERLAY_STRONG);
        assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_PRESSED);
    }

    #[test]
    fn primary_scale_darkens_with_index() {
        assert!(palette::PRIMARY_400.r > palette::PRIMARY_600.r);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_700.g);
    }
}
