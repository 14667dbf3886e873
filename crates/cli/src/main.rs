//! FitGear CLI - the storefront's view layer.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! fitgear products --category weights --sort price-low
//! fitgear product p1
//! fitgear categories
//!
//! # Manage the cart
//! fitgear cart add p1 --quantity 2
//! fitgear cart show
//! fitgear cart set-quantity p1 3
//! fitgear cart remove p1
//! fitgear cart clear
//!
//! # Check out
//! fitgear checkout --promo fitgear10
//!
//! # Demo session
//! fitgear auth login -e you@example.com
//! fitgear profile update --address "9 Gym Way"
//! fitgear auth logout
//! ```
//!
//! State persists under `FITGEAR_DATA_DIR` (default `fitgear-data/`),
//! one JSON file per store, so consecutive invocations behave like one
//! browsing session.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::auth::{AuthAction, ProfileAction};
use commands::cart::CartAction;
use commands::catalog::ProductsArgs;

#[derive(Parser)]
#[command(name = "fitgear")]
#[command(author, version, about = "FitGear storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products(ProductsArgs),
    /// Show a single product
    Product {
        /// Product ID (e.g. p1)
        id: String,
    },
    /// List the product categories
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the current cart
    Checkout {
        /// Promo code to apply
        #[arg(long)]
        promo: Option<String>,
    },
    /// Manage the demo session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// View or edit the signed-in profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products(args) => commands::catalog::products(&args)?,
        Commands::Product { id } => commands::catalog::product(&id)?,
        Commands::Categories => commands::catalog::categories()?,
        Commands::Cart { action } => commands::cart::dispatch(action)?,
        Commands::Checkout { promo } => commands::checkout::checkout(promo.as_deref())?,
        Commands::Auth { action } => commands::auth::dispatch(action)?,
        Commands::Profile { action } => commands::auth::dispatch_profile(action)?,
    }
    Ok(())
}
