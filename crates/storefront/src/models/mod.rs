//! Domain models owned by the stores.

pub mod cart;
pub mod user;

pub use cart::CartItem;
pub use user::{ProfileUpdate, User};
