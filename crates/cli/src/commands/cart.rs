//! Cart management commands.
//!
//! # Usage
//!
//! ```bash
//! fitgear cart add p1 --quantity 2
//! fitgear cart show
//! fitgear cart set-quantity p1 3
//! fitgear cart remove p1
//! fitgear cart clear
//! ```

use clap::Subcommand;

use fitgear_core::{ProductId, Quantity};
use fitgear_storefront::error::{AppError, Result};

use super::{load_catalog, load_config, open_cart};

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID (e.g. p1)
        id: String,
        /// Units to add; values below 1 are treated as 1
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Set the quantity of a cart line
    SetQuantity {
        /// Product ID
        id: String,
        /// New unit count; values below 1 are treated as 1
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

/// Run a cart subcommand.
pub fn dispatch(action: CartAction) -> Result<()> {
    match action {
        CartAction::Show => show(),
        CartAction::Add { id, quantity } => add(&id, quantity),
        CartAction::Remove { id } => remove(&id),
        CartAction::SetQuantity { id, quantity } => set_quantity(&id, quantity),
        CartAction::Clear => clear(),
    }
}

#[allow(clippy::print_stdout)]
fn show() -> Result<()> {
    let config = load_config()?;
    let cart = open_cart(&config)?;

    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for item in cart.items() {
        println!(
            "{:<4} {:<32} {} x {}  = ${:.2}",
            item.id.as_str(),
            item.name,
            item.price,
            item.quantity,
            item.line_total()
        );
    }
    println!();
    println!("Items:    {}", cart.total_quantity());
    println!("Subtotal: ${:.2}", cart.subtotal());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn add(id: &str, quantity: u32) -> Result<()> {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;
    let mut cart = open_cart(&config)?;

    let id = ProductId::new(id);
    let product = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    cart.add(product, Quantity::new(quantity));
    println!("Added {} to your cart.", product.name);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn remove(id: &str) -> Result<()> {
    let config = load_config()?;
    let mut cart = open_cart(&config)?;

    cart.remove(&ProductId::new(id));
    println!("Removed {id} from your cart.");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn set_quantity(id: &str, quantity: u32) -> Result<()> {
    let config = load_config()?;
    let mut cart = open_cart(&config)?;

    let id = ProductId::new(id);
    cart.set_quantity(&id, Quantity::new(quantity));
    match cart.get(&id) {
        Some(item) => println!("{} is now at quantity {}.", item.name, item.quantity),
        None => println!("{id} is not in your cart."),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn clear() -> Result<()> {
    let config = load_config()?;
    let mut cart = open_cart(&config)?;

    cart.clear();
    println!("Your cart is empty.");
    Ok(())
}
