//! FitGear Core - Shared domain types.
//!
//! This crate provides the common types used across all FitGear components:
//! - `storefront` - Catalog, cart, session and checkout logic
//! - `cli` - The `fitgear` command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! side effects. Invariants the rest of the system relies on
//! (non-negative prices, quantities of at least one, well-formed emails,
//! non-interchangeable entity IDs) are encoded here once, by construction.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
