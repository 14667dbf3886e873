//! The stateful storefront cores.
//!
//! Each store is an owned value: it hydrates from the storage port when
//! opened, holds its state privately, exposes command methods that take
//! `&mut self`, and persists after every mutation. Views receive
//! snapshots (`&[CartItem]`, `Option<&User>`) rather than handles to
//! shared mutable state.

pub mod auth;
pub mod cart;

pub use auth::AuthStore;
pub use cart::CartStore;
