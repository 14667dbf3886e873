//! CLI command implementations.
//!
//! Each module maps to one subcommand group. Commands load
//! configuration themselves, open the stores they need over
//! [`FileStorage`], and print human-readable output.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;

use fitgear_storefront::catalog::Catalog;
use fitgear_storefront::config::StorefrontConfig;
use fitgear_storefront::error::Result;
use fitgear_storefront::storage::FileStorage;
use fitgear_storefront::stores::{AuthStore, CartStore};

/// Load configuration from the environment.
pub(crate) fn load_config() -> Result<StorefrontConfig> {
    Ok(StorefrontConfig::from_env()?)
}

/// Load the catalog named by configuration, or the built-in one.
pub(crate) fn load_catalog(config: &StorefrontConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()?),
    }
}

/// Open the cart store over the configured data directory.
pub(crate) fn open_cart(config: &StorefrontConfig) -> Result<CartStore<FileStorage>> {
    let storage = FileStorage::open(&config.data_dir)?;
    Ok(CartStore::open(storage))
}

/// Open the session store over the configured data directory.
pub(crate) fn open_auth(config: &StorefrontConfig) -> Result<AuthStore<FileStorage>> {
    let storage = FileStorage::open(&config.data_dir)?;
    Ok(AuthStore::open(storage))
}
