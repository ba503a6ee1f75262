// SPDX-License-Identifier: MPL-2.0
//! Storefront header: brand title, tagline, and the cart toggle button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of distinct cart lines, shown on the badge when non-zero.
    pub line_count: usize,
    /// Whether the cart panel is currently open.
    pub cart_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    /// The cart button was pressed.
    ToggleCart,
}

/// Render the header row.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });

    let tagline = Text::new(ctx.i18n.tr("header-tagline"))
        .size(typography::H3)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::MUTED,
                ..palette::WHITE
            }),
        });

    let brand = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(title)
        .push(tagline);

    let row = Row::new()
        .padding([spacing::MD, spacing::LG])
        .align_y(Vertical::Center)
        .push(
            Container::new(brand)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(build_cart_button(&ctx));

    Container::new(row).width(Length::Fill).into()
}

/// Build the cart toggle button with its line-count badge.
fn build_cart_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = ctx.i18n.tr("header-cart-button");

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY));

    if ctx.line_count > 0 {
        let badge = Container::new(
            Text::new(ctx.line_count.to_string()).size(typography::SMALL),
        )
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge);
        content = content.push(badge);
    }

    button(content)
        .on_press(Message::ToggleCart)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::cart_toggle(ctx.cart_open))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn header_renders_without_badge_when_cart_empty() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            line_count: 0,
            cart_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn header_renders_with_badge_and_open_panel() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            line_count: 3,
            cart_open: true,
        };
        let _element = view(ctx);
    }
}
