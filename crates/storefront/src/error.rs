//! Unified application error type.
//!
//! The stores themselves never fail (fail-soft hydration and absorbed
//! write errors live in them); `AppError` covers the surfaces that are
//! fallible by design - configuration, catalog loading, storage setup,
//! checkout - so the CLI can handle one error type at its boundary.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend could not be opened or accessed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout was rejected.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User-supplied input could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
