//! The cart store: single source of truth for the pending purchase list.

use rust_decimal::Decimal;
use tracing::{error, warn};

use fitgear_core::{ProductId, Quantity};

use crate::catalog::Product;
use crate::models::CartItem;
use crate::storage::Storage;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// The visitor's shopping cart.
///
/// Lines keep insertion order, which is also display order. Adding a
/// product whose ID is already in the cart merges into the existing
/// line instead of appending a duplicate.
///
/// Every mutation persists the full line list under [`CART_KEY`].
/// Persistence is fail-soft in both directions: unreadable stored state
/// hydrates as an empty cart, and a failed write is logged without
/// failing the mutation. No cart operation returns an error.
pub struct CartStore<S: Storage> {
    items: Vec<CartItem>,
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Open the cart, hydrating any previously persisted state.
    pub fn open(storage: S) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(%err, "discarding unreadable cart state");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "cart storage unavailable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// The cart lines, in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of line totals. Recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all lines (the badge number).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity.get()))
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// Merges into the existing line when the product is already in the
    /// cart, otherwise appends a new line at the end.
    pub fn add(&mut self, product: &Product, quantity: Quantity) {
        self.add_item(CartItem::from_product(product, quantity));
    }

    /// Add a prepared line item, merging by product ID.
    ///
    /// On a merge only the quantity changes; the existing line keeps its
    /// name, price, and image.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
        self.persist();
    }

    /// Remove the line for a product. No-op if the product is not in
    /// the cart.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Set the quantity of an existing line. No-op if the product is
    /// not in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: Quantity) {
        if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Empty the cart and remove the persisted entry.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(err) = self.storage.remove(CART_KEY) {
            error!(%err, "failed to remove persisted cart");
        }
    }

    /// Write the full line list to storage, absorbing failures.
    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(CART_KEY, &raw) {
                    error!(%err, "failed to persist cart");
                }
            }
            Err(err) => error!(%err, "failed to serialize cart"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::storage::MemoryStorage;
    use fitgear_core::Price;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(Decimal::new(price_cents, 2)).unwrap(),
            category: Category::Weights,
            image: None,
            description: String::new(),
            date: "2025-01-01".parse().unwrap(),
            is_new: false,
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = CartStore::open(MemoryStorage::new());
        let p1 = product("p1", 2_000);

        cart.add(&p1, Quantity::new(2));
        cart.add(&p1, Quantity::new(3));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&p1.id).unwrap().quantity.get(), 5);
        assert_eq!(cart.subtotal(), Decimal::new(10_000, 2));
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add(&product("p2", 1_000), Quantity::ONE);
        cart.add(&product("p1", 2_000), Quantity::ONE);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::open(MemoryStorage::new());
        let p1 = product("p1", 2_000);
        cart.add(&p1, Quantity::ONE);

        cart.remove(&p1.id);
        assert!(cart.is_empty());

        // Second removal changes nothing.
        cart.remove(&p1.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add(&product("p1", 2_000), Quantity::ONE);

        cart.set_quantity(&ProductId::new("p9"), Quantity::new(4));
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity.get(), 1);
        assert!(cart.get(&ProductId::new("p9")).is_none());
    }

    #[test]
    fn test_total_quantity_sums_units() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add(&product("p1", 2_000), Quantity::new(2));
        cart.add(&product("p2", 1_000), Quantity::new(3));

        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_mutations_persist_to_storage() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::open(storage);
        cart.add(&product("p1", 2_000), Quantity::new(2));

        let reloaded = CartStore::open(cart.storage);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(&ProductId::new("p1")).unwrap().quantity.get(), 2);
    }

    #[test]
    fn test_clear_removes_persisted_entry() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::open(storage);
        cart.add(&product("p1", 2_000), Quantity::ONE);
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.storage.get(CART_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_state_hydrates_empty() {
        let storage = MemoryStorage::new();
        storage.set(CART_KEY, "not json at all").unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_in_storage_is_corrupt() {
        let storage = MemoryStorage::new();
        storage
            .set(
                CART_KEY,
                r#"[{"id":"p1","name":"X","price":"1.00","quantity":0}]"#,
            )
            .unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }
}
