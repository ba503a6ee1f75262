// SPDX-License-Identifier: MPL-2.0
//! Sliding cart panel: line items with quantity steppers, the running total,
//! and a checkout button that is deliberately non-functional.

use crate::cart::CartLine;
use crate::catalog::Price;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{format_price, styles};
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length, Theme,
};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Cart lines in insertion order.
    pub lines: &'a [CartLine],
    /// Derived cart total.
    pub total: Price,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close the panel.
    Close,
    /// Increment the quantity of the line with this product id.
    Increment(String),
    /// Decrement the quantity of the line with this product id.
    Decrement(String),
    /// Remove the line with this product id entirely.
    Remove(String),
}

/// Render the cart panel, docked to the right edge.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("cart-title")).size(typography::H2))
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::plain),
        );

    let mut body = Column::new().spacing(spacing::LG);

    if ctx.lines.is_empty() {
        body = body.push(
            Text::new(ctx.i18n.tr("cart-empty"))
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ZINC_400),
                }),
        );
    } else {
        for line in ctx.lines {
            body = body.push(build_line(ctx.i18n, line));
        }
    }

    let total_row = Container::new(
        Text::new(format!(
            "{}: {}",
            ctx.i18n.tr("cart-total"),
            format_price(ctx.total)
        ))
        .size(typography::H3),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    // Checkout goes nowhere: no message is wired, so the button renders in
    // its disabled style.
    let checkout = button(
        Container::new(Text::new(ctx.i18n.tr("cart-checkout")).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(scrollable(body).height(Length::Fill))
        .push(total_row)
        .push(checkout);

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build a single cart line row.
fn build_line<'a>(i18n: &'a I18n, line: &'a CartLine) -> Element<'a, Message> {
    let name = Text::new(line.name.as_str()).size(typography::BODY);

    let decrement = button(Text::new("−").size(typography::BODY))
        .on_press(Message::Decrement(line.id.clone()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::quantity);

    let increment = button(Text::new("＋").size(typography::BODY))
        .on_press(Message::Increment(line.id.clone()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::quantity);

    let remove = button(Text::new(i18n.tr("cart-remove")).size(typography::SMALL))
        .on_press(Message::Remove(line.id.clone()))
        .padding(spacing::XXS)
        .style(styles::button::danger_link);

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(decrement)
        .push(Text::new(line.quantity().to_string()).size(typography::BODY))
        .push(increment)
        .push(remove);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(name)
        .push(controls);

    let line_total = Text::new(format_price(line.line_total()))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::OPAQUE,
                ..palette::PINK_400
            }),
        });

    Row::new()
        .align_y(Vertical::Top)
        .push(details)
        .push(line_total)
        .into()
}
