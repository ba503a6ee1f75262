// SPDX-License-Identifier: MPL-2.0
//! Static product catalog.
//!
//! The catalog is built once at startup and never mutated. Cart lines copy
//! the product fields they need at insertion time, so the cart can never be
//! affected by catalog changes after the fact.

use std::fmt;

/// Product price as a minor-unit-free integer currency amount.
///
/// Prices stay integers end to end so cart totals never accumulate
/// floating-point error. The currency symbol and any decimal display
/// formatting belong to the UI layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    /// Creates a price from an integer amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the raw integer amount.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|price| price.0).sum())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URI reference. Never fetched or validated.
    pub image: String,
}

impl Product {
    fn new(id: &str, name: &str, price: u64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: Price::new(price),
            image: image.to_string(),
        }
    }
}

/// Builds the fixed, ordered product list shown on the storefront.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Holographic Hoodie",
            3499,
            "https://via.placeholder.com/400x400?text=Hoodie",
        ),
        Product::new(
            "2",
            "Neo Tokyo Tee",
            1799,
            "https://via.placeholder.com/400x400?text=Tee",
        ),
        Product::new(
            "3",
            "Cyber Cargo Pants",
            2999,
            "https://via.placeholder.com/400x400?text=Cargo",
        ),
    ]
}
