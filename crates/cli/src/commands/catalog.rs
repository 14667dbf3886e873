//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! fitgear products --query rope --category cardio --sort price-low
//! fitgear product p5
//! fitgear categories
//! ```

use clap::Args;
use rust_decimal::Decimal;

use fitgear_core::{Price, ProductId};
use fitgear_storefront::catalog::{Category, Product, ProductFilter, SortOrder};
use fitgear_storefront::error::{AppError, Result};

use super::{load_catalog, load_config};

/// Arguments for the product listing.
#[derive(Args)]
pub struct ProductsArgs {
    /// Filter by name substring (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by category; repeatable (weights, cardio, accessories, clothing, supplements)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Inclusive minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Inclusive maximum price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Sort order: featured, price-low, price-high, newest
    #[arg(short, long, default_value = "featured")]
    pub sort: String,
}

/// List catalog products with optional filters.
#[allow(clippy::print_stdout)]
pub fn products(args: &ProductsArgs) -> Result<()> {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;

    let filter = ProductFilter {
        query: args.query.clone(),
        min_price: args.min_price.as_deref().map(parse_price).transpose()?,
        max_price: args.max_price.as_deref().map(parse_price).transpose()?,
        categories: args
            .category
            .iter()
            .map(|raw| raw.parse::<Category>().map_err(AppError::InvalidInput))
            .collect::<Result<Vec<_>>>()?,
        sort: args
            .sort
            .parse::<SortOrder>()
            .map_err(AppError::InvalidInput)?,
    };

    let hits = filter.apply(catalog.all());
    for product in &hits {
        print_row(product);
    }
    println!("Showing {} of {} products", hits.len(), catalog.len());
    Ok(())
}

/// Show one product in detail.
#[allow(clippy::print_stdout)]
pub fn product(id: &str) -> Result<()> {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;

    let id = ProductId::new(id);
    let product = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!("{}", product.name);
    println!("  ID:       {}", product.id);
    println!("  Price:    {}", product.price);
    println!("  Category: {}", product.category);
    println!("  Added:    {}", product.date);
    if product.is_new {
        println!("  Badge:    New");
    }
    println!();
    println!("{}", product.description);
    Ok(())
}

/// List all categories with their product counts.
#[allow(clippy::print_stdout)]
pub fn categories() -> Result<()> {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;

    for category in Category::ALL {
        println!(
            "{} ({} products)",
            category,
            catalog.count_in_category(category)
        );
        println!("  {}", category.description());
    }
    Ok(())
}

/// Parse a CLI price argument into a non-negative [`Price`].
fn parse_price(raw: &str) -> Result<Price> {
    let amount = raw
        .parse::<Decimal>()
        .map_err(|e| AppError::InvalidInput(format!("price {raw:?}: {e}")))?;
    Price::new(amount).map_err(|e| AppError::InvalidInput(e.to_string()))
}

#[allow(clippy::print_stdout)]
fn print_row(product: &Product) {
    let badge = if product.is_new { "  [New]" } else { "" };
    println!(
        "{:<4} {:<32} {:>9}  {}{}",
        product.id.as_str(),
        product.name,
        product.price.to_string(),
        product.category,
        badge
    );
}
