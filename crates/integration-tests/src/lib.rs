//! Integration tests for FitGear.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fitgear-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart behavior and storage round-trips
//! - `auth_session` - Session lifecycle and profile persistence
//! - `checkout_flow` - Quotes, promo codes, and order placement
//!
//! Tests exercise the stores through the on-disk [`FileStorage`]
//! backend in a temp directory, i.e. the same wiring the CLI uses.
//!
//! [`FileStorage`]: fitgear_storefront::storage::FileStorage

#![cfg_attr(not(test), forbid(unsafe_code))]
