// SPDX-License-Identifier: MPL-2.0
//! In-memory shopping cart store.
//!
//! `CartStore` is the single source of truth for what the user intends to
//! purchase: an ordered list of lines, at most one per product id, with the
//! derived total computed on demand. Every operation is synchronous and
//! total; unknown ids are tolerated as no-ops instead of errors.
//!
//! The store is deliberately UI-agnostic. Mutations return an [`Event`] and
//! the application decides how to react (open the cart panel, show a toast),
//! mirroring how the navbar propagates events to its parent.

use crate::catalog::{Price, Product};

/// A single cart entry.
///
/// Product fields are copied at line creation, not referenced, so a line is
/// stable for the lifetime of the cart. `quantity` is private: it is always
/// at least 1 while the line exists, and a line that would reach zero is
/// removed from the cart rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
    quantity: u32,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Number of units on this line. Always ≥ 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this line: unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Events propagated to the application after a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing user-visible happened beyond the cart contents changing.
    None,
    /// A product was added (new line or increment of an existing one).
    Added,
}

/// Ordered cart state with derived total.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// An existing line for the same id is incremented in place; otherwise a
    /// new line with quantity 1 is appended, so insertion order is the
    /// first-added order even across later increments. The catalog is
    /// trusted, so this cannot fail.
    pub fn add_item(&mut self, product: &Product) -> Event {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::new(product));
        }
        Event::Added
    }

    /// Adds `delta` to the quantity of the line with `id`.
    ///
    /// Unknown ids are silently ignored. A resulting quantity ≤ 0 removes
    /// the line entirely; quantities are never stored at or below zero.
    pub fn update_quantity(&mut self, id: &str, delta: i32) -> Event {
        let Some(pos) = self.lines.iter().position(|line| line.id == id) else {
            return Event::None;
        };

        let current = self.lines.get(pos).map_or(0, |line| i64::from(line.quantity));
        let updated = current + i64::from(delta);

        if updated <= 0 {
            self.lines.remove(pos);
        } else if let Some(line) = self.lines.get_mut(pos) {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
        Event::None
    }

    /// Removes the line with `id` if present; no-op otherwise.
    pub fn remove_item(&mut self, id: &str) -> Event {
        self.lines.retain(|line| line.id != id);
        Event::None
    }

    /// Exact sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not units), shown on the cart badge.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;

    fn hoodie() -> Product {
        products().into_iter().find(|p| p.id == "1").expect("catalog product")
    }

    fn tee() -> Product {
        products().into_iter().find(|p| p.id == "2").expect("catalog product")
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total(), Price::new(0));
    }

    #[test]
    fn add_item_creates_line_with_quantity_one() {
        let mut cart = CartStore::new();
        let event = cart.add_item(&hoodie());

        assert_eq!(event, Event::Added);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity(), 1);
        assert_eq!(cart.total(), Price::new(3499));
    }

    #[test]
    fn repeated_add_merges_into_single_line() {
        let mut cart = CartStore::new();
        for _ in 0..5 {
            cart.add_item(&hoodie());
        }

        assert_eq!(cart.line_count(), 1, "same id must never produce two lines");
        assert_eq!(cart.lines()[0].quantity(), 5);
        assert_eq!(cart.total(), Price::new(5 * 3499));
    }

    #[test]
    fn second_add_doubles_total() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&hoodie());

        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.total(), Price::new(6998));
    }

    #[test]
    fn insertion_order_survives_later_increments() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&tee());
        cart.add_item(&hoodie());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn decrement_reduces_quantity_and_total() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&hoodie());

        cart.update_quantity("1", -1);
        assert_eq!(cart.lines()[0].quantity(), 1);
        assert_eq!(cart.total(), Price::new(3499));
    }

    #[test]
    fn decrement_to_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());

        cart.update_quantity("1", -1);
        assert!(cart.is_empty(), "a line never exists at quantity 0");
        assert_eq!(cart.total(), Price::new(0));
    }

    #[test]
    fn large_negative_delta_removes_line_without_underflow() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&hoodie());

        cart.update_quantity("1", -100);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_after_removal_is_a_no_op() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.update_quantity("1", -1);

        let event = cart.update_quantity("1", 3);
        assert_eq!(event, Event::None);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_unknown_id_is_silently_ignored() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());

        cart.update_quantity("no-such-id", 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity(), 1);
    }

    #[test]
    fn remove_item_deletes_only_matching_line() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&tee());

        cart.remove_item("1");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].id, "2");
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());

        cart.remove_item("missing");
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn add_then_full_remove_round_trips_total() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        let before = cart.total();

        cart.add_item(&tee());
        cart.add_item(&tee());
        cart.remove_item("2");

        assert_eq!(cart.total(), before);
    }

    #[test]
    fn total_sums_mixed_lines_exactly() {
        let mut cart = CartStore::new();
        cart.add_item(&hoodie());
        cart.add_item(&hoodie());
        cart.add_item(&tee());

        assert_eq!(cart.total(), Price::new(2 * 3499 + 1799));
    }

    #[test]
    fn lines_copy_product_fields() {
        let mut cart = CartStore::new();
        let product = hoodie();
        cart.add_item(&product);

        let line = &cart.lines()[0];
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.image, product.image);
    }
}
