//! FitGear Storefront - catalog, cart, session and checkout core.
//!
//! This crate holds everything stateful about the storefront, as a
//! library so the view layer (the `fitgear` CLI) stays a thin consumer:
//!
//! - [`catalog`] - the read-only product catalog and its query surface
//! - [`stores`] - the cart and session stores, each owning its state and
//!   persisting through the storage port on every mutation
//! - [`storage`] - the storage port: string keys, JSON string values,
//!   with in-memory and on-disk backends
//! - [`checkout`] - order quote math and the order-placement stub
//! - [`config`] - environment-driven configuration
//!
//! # Concurrency
//!
//! The core is single-threaded and synchronous. Stores are owned values
//! mutated through `&mut self`; there is no shared global state, no
//! locking, and no background work. Two processes pointed at the same
//! data directory are last-write-wins, by design.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod stores;
