// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the storefront's dark theme.
//!
//! Organization mirrors the usual token groups: palette, opacity, spacing,
//! sizing, typography, border, radius, shadow. Tokens are designed to be
//! consistent; check usage across components before changing a value.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (zinc scale)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const ZINC_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const ZINC_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const ZINC_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
    pub const ZINC_400: Color = Color::from_rgb(0.631, 0.631, 0.667);
    pub const ZINC_200: Color = Color::from_rgb(0.894, 0.894, 0.906);

    // Brand colors (pink scale)
    pub const PINK_300: Color = Color::from_rgb(0.976, 0.659, 0.831);
    pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714);
    pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600);
    pub const PINK_600: Color = Color::from_rgb(0.859, 0.153, 0.467);
    pub const PINK_700: Color = Color::from_rgb(0.745, 0.094, 0.365);

    // Accent used by the decorative background mesh (#ff0055)
    pub const MESH_ACCENT: Color = Color::from_rgb(1.0, 0.0, 0.333);

    // Semantic colors
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const DANGER_300: Color = Color::from_rgb(0.988, 0.647, 0.647);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const MESH_SUBTLE: f32 = 0.35;
    pub const MUTED: f32 = 0.7;
    pub const FAINT: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for panels floating over the animated backdrop.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of a product card.
    pub const CARD_WIDTH: f32 = 280.0;
    /// Height of the placeholder image block on a card.
    pub const CARD_IMAGE_HEIGHT: f32 = 200.0;
    /// Width of the sliding cart panel.
    pub const PANEL_WIDTH: f32 = 400.0;
    /// Width of the toast card.
    pub const TOAST_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 56.0;
    pub const H1: f32 = 34.0;
    pub const H2: f32 = 24.0;
    pub const H3: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const SMALL: f32 = 13.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 3.0),
        blur_radius: 12.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn brand_scale_darkens_monotonically() {
        assert!(palette::PINK_400.r > palette::PINK_600.r);
        assert!(palette::ZINC_900.r < palette::ZINC_700.r);
    }
}
