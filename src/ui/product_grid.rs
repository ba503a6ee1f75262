// SPDX-License-Identifier: MPL-2.0
//! Product grid: one card per catalog entry.
//!
//! Cards show a placeholder block where the product image would be; the
//! image URI is never fetched (there is no network I/O in this app).

use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{format_price, styles};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The fixed catalog, in display order.
    pub products: &'a [Product],
}

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// Add one unit of the product to the cart. The product is carried by
    /// value so the store receives a trusted catalog record.
    AddToCart(Product),
}

/// Render the product grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for product in ctx.products {
        row = row.push(build_card(ctx.i18n, product));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

/// Build a single product card.
fn build_card<'a>(i18n: &'a I18n, product: &'a Product) -> Element<'a, Message> {
    let image_placeholder = Container::new(
        Text::new(product.name.as_str()).size(typography::SMALL),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::card_image);

    let name = Text::new(product.name.as_str()).size(typography::H3);

    let price = Text::new(format_price(product.price))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PINK_400),
        });

    let add_button = button(
        Container::new(Text::new(i18n.tr("product-add-to-cart")).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::AddToCart(product.clone()))
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let card = Column::new()
        .spacing(spacing::SM)
        .push(image_placeholder)
        .push(name)
        .push(price)
        .push(add_button);

    Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
