// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a stack: the animated background canvas at the bottom, the
//! scrollable storefront content above it, then the cart panel and toast
//! overlays when they are live.

use super::Message;
use crate::cart::CartStore;
use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::background::TorusKnot;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::{cart_panel, header, product_grid, toast};
use iced::widget::{scrollable, text, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a [Product],
    pub cart: &'a CartStore,
    pub cart_open: bool,
    pub toast: &'a toast::State,
    pub rotation: f32,
}

/// Renders the full storefront view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let background = TorusKnot::new(ctx.rotation).into_element();

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(view_page(&ctx));

    if ctx.cart_open {
        stack = stack.push(view_cart_overlay(&ctx));
    }

    if ctx.toast.is_visible() {
        stack = stack.push(toast::view(ctx.toast, ctx.i18n).map(Message::Toast));
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::BLACK)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        })
        .into()
}

/// The scrolling page body: header, hero copy, product grid, footer.
fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        line_count: ctx.cart.line_count(),
        cart_open: ctx.cart_open,
    })
    .map(Message::Header);

    let hero = view_hero(ctx.i18n);

    let grid = product_grid::view(product_grid::ViewContext {
        i18n: ctx.i18n,
        products: ctx.catalog,
    })
    .map(Message::ProductGrid);

    let footer = Container::new(
        Text::new(ctx.i18n.tr("footer-copyright"))
            .size(typography::SMALL)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ZINC_400),
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::LG);

    let page = Column::new()
        .width(Length::Fill)
        .push(header_view)
        .push(hero)
        .push(grid)
        .push(footer);

    scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_hero<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("hero-title")).size(typography::H1);

    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::MUTED,
                ..palette::WHITE
            }),
        });

    let column = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::SM)
        .push(title)
        .push(subtitle);

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// The cart panel docked to the right edge of the window.
fn view_cart_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = cart_panel::view(cart_panel::ViewContext {
        i18n: ctx.i18n,
        lines: ctx.cart.lines(),
        total: ctx.cart.total(),
    })
    .map(Message::CartPanel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}
