// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Product card surface.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_900)),
        border: Border {
            color: palette::ZINC_700,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder block standing in for the (never fetched) product image.
pub fn card_image(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_800)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        text_color: Some(palette::ZINC_400),
        ..Default::default()
    }
}

/// Sliding cart panel surface.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::ZINC_900
        })),
        border: Border {
            color: palette::ZINC_700,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Toast card floating near the bottom of the window.
pub fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_800)),
        border: Border {
            color: palette::PINK_600,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Small circular badge showing the cart line count.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PINK_500)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
