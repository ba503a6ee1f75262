// SPDX-License-Identifier: MPL-2.0
//! UI components for the storefront.

pub mod background;
pub mod cart_panel;
pub mod design_tokens;
pub mod header;
pub mod product_grid;
pub mod styles;
pub mod toast;

use crate::catalog::Price;

/// Fixed currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats a price for display. The core stores exact integer amounts;
/// the symbol prefix is purely presentational.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("{CURRENCY_SYMBOL}{}", price.amount())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_prefixes_symbol() {
        assert_eq!(format_price(Price::new(3499)), "₹3499");
        assert_eq!(format_price(Price::new(0)), "₹0");
    }
}
