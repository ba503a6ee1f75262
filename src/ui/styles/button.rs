// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (Add to Cart, hero call-to-action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PINK_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PINK_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PINK_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PINK_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::ZINC_700)),
            text_color: palette::ZINC_400,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Small quantity stepper button (− / ＋) inside a cart line.
pub fn quantity(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ZINC_700,
        _ => palette::ZINC_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::ZINC_200,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only destructive action (Remove line).
pub fn danger_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::DANGER_300,
        _ => palette::DANGER_500,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Plain text button (panel close, toast dismiss).
pub fn plain(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => WHITE,
        _ => palette::ZINC_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header cart toggle; highlighted while the panel is open.
pub fn cart_toggle(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if open {
            palette::PINK_600
        } else {
            match status {
                button::Status::Hovered => palette::ZINC_700,
                _ => palette::ZINC_800,
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}
