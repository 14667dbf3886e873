//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fitgear_core::{Price, ProductId, Quantity};

use crate::catalog::Product;

/// One line of the cart: a product reference plus a requested quantity.
///
/// The line carries a copy of the display fields (name, price, image) so
/// the cart renders without a catalog lookup, matching what gets
/// persisted. The product `id` is the uniqueness key; the cart store
/// guarantees no two lines share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog ID of the product.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Unit price at the time the line was added.
    pub price: Price,
    /// Product image path, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Units requested; at least one by construction.
    pub quantity: Quantity,
}

impl CartItem {
    /// Build a line item from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, quantity: Quantity) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity.get())
    }
}
