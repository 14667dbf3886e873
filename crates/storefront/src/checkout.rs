//! Order quotes and the order-placement stub.
//!
//! Quotes are pure math over the current cart lines; nothing here talks
//! to a payment provider or records the order anywhere. Placing an
//! order validates the promo code, produces a confirmation, and clears
//! the cart - that is the entire fulfillment pipeline.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use fitgear_core::OrderId;

use crate::models::CartItem;
use crate::storage::Storage;
use crate::stores::CartStore;

/// Orders above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Decimal = Decimal::TEN;

/// The one promo code the storefront accepts (case-insensitive).
pub const PROMO_CODE: &str = "fitgear10";

/// Percentage taken off the subtotal by [`PROMO_CODE`].
pub const PROMO_DISCOUNT_PERCENT: Decimal = Decimal::TEN;

/// Days between placing an order and its estimated delivery.
const DELIVERY_ESTIMATE_DAYS: i64 = 7;

/// Errors that can occur while quoting or placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines to quote.
    #[error("cart is empty")]
    EmptyCart,

    /// The supplied promo code is not recognized.
    #[error("invalid promo code {0:?}")]
    InvalidPromoCode(String),
}

/// A priced order summary for the current cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuote {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Shipping charge after the free-shipping rule.
    pub shipping: Decimal,
    /// Promo discount taken off the subtotal.
    pub discount: Decimal,
    /// `subtotal + shipping - discount`.
    pub total: Decimal,
}

impl OrderQuote {
    /// Quote the given cart lines, applying an optional promo code.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty line list and
    /// [`CheckoutError::InvalidPromoCode`] for an unrecognized code.
    pub fn for_items(items: &[CartItem], promo_code: Option<&str>) -> Result<Self, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();

        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_RATE
        };

        let discount = match promo_code {
            Some(code) if code.trim().eq_ignore_ascii_case(PROMO_CODE) => {
                subtotal * PROMO_DISCOUNT_PERCENT / Decimal::ONE_HUNDRED
            }
            Some(code) => return Err(CheckoutError::InvalidPromoCode(code.to_owned())),
            None => Decimal::ZERO,
        };

        Ok(Self {
            subtotal,
            shipping,
            discount,
            total: subtotal + shipping - discount,
        })
    }
}

/// The result of a placed order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Human-facing order reference (`FG-` prefix).
    pub order_number: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Estimated delivery date.
    pub estimated_delivery: DateTime<Utc>,
    /// The quote the order was placed at.
    pub quote: OrderQuote,
}

/// Place an order for the current cart and clear it.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to order,
/// or [`CheckoutError::InvalidPromoCode`] for an unrecognized code. The
/// cart is left untouched on error.
pub fn place_order<S: Storage>(
    cart: &mut CartStore<S>,
    promo_code: Option<&str>,
) -> Result<OrderConfirmation, CheckoutError> {
    let quote = OrderQuote::for_items(cart.items(), promo_code)?;

    let placed_at = Utc::now();
    let confirmation = OrderConfirmation {
        order_number: order_number(),
        placed_at,
        estimated_delivery: placed_at + TimeDelta::days(DELIVERY_ESTIMATE_DAYS),
        quote,
    };

    cart.clear();
    tracing::info!(order = %confirmation.order_number, total = %confirmation.quote.total, "order placed");
    Ok(confirmation)
}

/// Generate a short, human-readable order reference.
fn order_number() -> OrderId {
    let short: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect::<String>()
        .to_uppercase();
    OrderId::new(format!("FG-{short}"))
}
