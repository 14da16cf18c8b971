// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! Tokens are designed to be consistent; maintain the ratios of the spacing
//! scale (8px grid) when adjusting values.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimmed backdrop behind the detail overlay.
    pub const OVERLAY_STRONG: f32 = 0.8;
    /// Card and panel surfaces over the themed background.
    pub const SURFACE: f32 = 0.6;
    /// De-emphasized text (dates, placeholders).
    pub const MUTED: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
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
    /// Fixed width of one gallery card.
    pub const CARD_WIDTH: f32 = 240.0;
    /// Fixed height of a card's media region.
    pub const CARD_MEDIA_HEIGHT: f32 = 160.0;
    /// Maximum width of the detail overlay's inner panel.
    pub const MODAL_WIDTH: f32 = 720.0;
    /// Width of a date input field.
    pub const DATE_INPUT_WIDTH: f32 = 130.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const HEADLINE: f32 = 24.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Number of gallery cards per row.
pub const CARDS_PER_ROW: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert!((spacing::SM - spacing::XS * 2.0).abs() < f32::EPSILON);
        assert!((spacing::MD - spacing::SM * 2.0).abs() < f32::EPSILON);
        assert!((spacing::XL - spacing::MD * 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn opacity_values_are_valid() {
        for value in [opacity::OVERLAY_STRONG, opacity::SURFACE, opacity::MUTED] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
