//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! fitgear checkout
//! fitgear checkout --promo fitgear10
//! ```

use rust_decimal::Decimal;

use fitgear_storefront::checkout::place_order;
use fitgear_storefront::error::Result;

use super::{load_config, open_cart};

/// Quote the cart, place the order, and report the confirmation.
#[allow(clippy::print_stdout)]
pub fn checkout(promo_code: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let mut cart = open_cart(&config)?;

    let confirmation = place_order(&mut cart, promo_code)?;
    let quote = &confirmation.quote;

    println!("Order placed!");
    println!();
    println!("Order #{}", confirmation.order_number);
    println!("  Subtotal: ${:.2}", quote.subtotal);
    if quote.shipping == Decimal::ZERO {
        println!("  Shipping: Free");
    } else {
        println!("  Shipping: ${:.2}", quote.shipping);
    }
    if quote.discount > Decimal::ZERO {
        println!("  Discount: -${:.2}", quote.discount);
    }
    println!("  Total:    ${:.2}", quote.total);
    println!();
    println!("Date: {}", confirmation.placed_at.format("%Y-%m-%d"));
    println!(
        "Estimated delivery: {}",
        confirmation.estimated_delivery.format("%Y-%m-%d")
    );
    Ok(())
}
