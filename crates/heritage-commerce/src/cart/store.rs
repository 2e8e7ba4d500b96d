//! Persistent cart state container.

use crate::cart::{Cart, CartLine, CartSnapshot, CartTotals, ProductSnapshot};
use crate::ids::ProductId;
use crate::money::Money;
use heritage_cache::{cache_key, Cache, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the cart snapshot is written under.
pub fn cart_storage_key() -> String {
    cache_key!("heritage", "cart")
}

/// Identifies a listener registered with [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a state-changing cart operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartChange {
    /// Units were added; `quantity` is the line's new quantity.
    ItemAdded { product_id: ProductId, quantity: i64 },
    /// A line was removed, directly or by setting its quantity to 0.
    ItemRemoved { product_id: ProductId },
    /// A line's quantity was set.
    QuantityUpdated { product_id: ProductId, quantity: i64 },
    /// Every line was removed.
    Cleared,
}

/// Notification delivered to listeners after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEvent {
    pub change: CartChange,
    /// Cart revision after the change.
    pub revision: u64,
    /// Fresh aggregates after the change.
    pub totals: CartTotals,
}

type Listener = Box<dyn FnMut(&CartEvent)>;

/// The authoritative cart for a session.
///
/// Wraps a [`Cart`] with write-through persistence to a key-value store and
/// change notification. All operations are total: unknown ids and
/// non-positive quantities degrade to defined no-ops, and storage failures
/// are logged rather than returned.
///
/// # Example
///
/// ```
/// use heritage_cache::MemoryStore;
/// use heritage_commerce::cart::{CartStore, ProductSnapshot};
/// use heritage_commerce::catalog::Catalog;
///
/// let store = MemoryStore::new();
/// let mut cart = CartStore::restore(store.clone());
///
/// let lamp = Catalog::builtin().find("2").unwrap();
/// cart.add_item(ProductSnapshot::from(lamp), None);
/// cart.add_item(ProductSnapshot::from(lamp), None);
/// assert_eq!(cart.total_items(), 2);
///
/// // A new container over the same store sees the saved cart.
/// let reloaded = CartStore::restore(store);
/// assert_eq!(reloaded.items(), cart.items());
/// ```
pub struct CartStore<S> {
    cart: Cart,
    cache: Cache<S>,
    key: String,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restore the cart saved in `store`, or start empty.
    pub fn restore(store: S) -> Self {
        Self::restore_with(store, cart_storage_key())
    }

    /// Restore from a specific key.
    ///
    /// A missing value, a value that doesn't parse, or a snapshot that
    /// breaks a cart invariant all produce an empty cart.
    pub fn restore_with(store: S, key: impl Into<String>) -> Self {
        let cache = Cache::new(store);
        let key = key.into();

        let cart = match cache.get::<CartSnapshot>(&key) {
            Ok(Some(snapshot)) => Cart::from_snapshot(snapshot).unwrap_or_else(|| {
                tracing::warn!(key = %key, "saved cart breaks cart invariants, starting empty");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not read saved cart, starting empty");
                Cart::new()
            }
        };

        tracing::debug!(
            key = %key,
            lines = cart.line_count(),
            total_items = cart.total_items(),
            "cart restored"
        );

        Self {
            cart,
            cache,
            key,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add one unit of a product (see [`Cart::add_item`]).
    pub fn add_item(&mut self, snapshot: ProductSnapshot, variant: Option<String>) {
        self.add_items(snapshot, variant, 1);
    }

    /// Add `count` units with a single write and a single event.
    /// `count <= 0` does nothing.
    pub fn add_items(&mut self, snapshot: ProductSnapshot, variant: Option<String>, count: i64) {
        let product_id = snapshot.product_id.clone();
        if self.cart.add_item_count(snapshot, variant, count) {
            let quantity = self
                .cart
                .line(product_id.as_str())
                .map_or(0, |line| line.quantity);
            self.commit(CartChange::ItemAdded {
                product_id,
                quantity,
            });
        }
    }

    /// Remove a product's line. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        if self.cart.remove_item(product_id) {
            self.commit(CartChange::ItemRemoved {
                product_id: ProductId::new(product_id),
            });
        }
    }

    /// Set a line's quantity; `<= 0` removes it. No-op for unknown ids.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if self.cart.update_quantity(product_id, quantity) {
            self.commit(CartChange::QuantityUpdated {
                product_id: ProductId::new(product_id),
                quantity,
            });
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        if self.cart.clear() {
            self.commit(CartChange::Cleared);
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        self.cart.items()
    }

    /// The line for a product, if any.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of price times quantity.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number of state changes since this container was created.
    ///
    /// Callers that poll instead of subscribing re-render when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Storage key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Register a listener called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    fn commit(&mut self, change: CartChange) {
        self.revision += 1;
        self.persist();

        let event = CartEvent {
            change,
            revision: self.revision,
            totals: self.cart.totals(),
        };
        tracing::debug!(
            change = ?event.change,
            revision = event.revision,
            total_items = event.totals.total_items,
            total_price = %event.totals.total_price,
            "cart changed"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.cart.snapshot()) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }
}

impl<S> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("key", &self.key)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use heritage_cache::{CacheError, MemoryStore};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn snapshot(id: &str) -> ProductSnapshot {
        ProductSnapshot::from(Catalog::builtin().find(id).unwrap())
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".into()))
        }
        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }
        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(vec![])
        }
    }

    /// Wraps a [`MemoryStore`] and counts writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: Cell<usize>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }
        fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.inner.delete(key)
        }
        fn keys(&self) -> Result<Vec<String>, CacheError> {
            self.inner.keys()
        }
    }

    #[test]
    fn test_repeated_adds_make_one_line() {
        let mut cart = CartStore::restore(MemoryStore::new());
        for _ in 0..4 {
            cart.add_item(snapshot("8"), None);
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.line("8").unwrap().quantity, 4);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::kwd(114_000));
    }

    #[test]
    fn test_add_items_counts() {
        let mut cart = CartStore::restore(MemoryStore::new());
        cart.add_items(snapshot("2"), None, 3);
        cart.add_items(snapshot("4"), None, 0);
        cart.add_items(snapshot("4"), None, -2);
        assert_eq!(cart.total_items(), 3);
        assert!(cart.line("4").is_none());
    }

    #[test]
    fn test_add_items_writes_and_notifies_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::restore(CountingStore::default());
        let sink = Rc::clone(&events);
        cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        cart.add_items(snapshot("8"), None, 25);

        assert_eq!(cart.store().writes.get(), 1);
        assert_eq!(cart.revision(), 1);
        assert_eq!(
            events.borrow().as_slice(),
            &[CartEvent {
                change: CartChange::ItemAdded { product_id: "8".into(), quantity: 25 },
                revision: 1,
                totals: cart.totals(),
            }]
        );

        cart.add_items(snapshot("8"), None, 0);
        assert_eq!(cart.store().writes.get(), 1);
    }

    #[test]
    fn test_add_items_with_huge_count_returns() {
        let mut cart = CartStore::restore(CountingStore::default());
        cart.add_items(snapshot("8"), None, i64::MAX);
        assert_eq!(cart.line("8").unwrap().quantity, i64::MAX);
        assert_eq!(cart.store().writes.get(), 1);
    }

    #[test]
    fn test_every_change_is_written_through() {
        let store = MemoryStore::new();
        let mut cart = CartStore::restore(store.clone());
        let cache = Cache::new(store);

        cart.add_item(snapshot("1"), Some("Large".into()));
        let saved: CartSnapshot = cache.get(&cart_storage_key()).unwrap().unwrap();
        assert_eq!(saved.items.len(), 1);
        assert_eq!(saved.items[0].variant.as_deref(), Some("Large"));
        assert!(saved.saved_at.is_some());

        cart.update_quantity("1", 3);
        let saved: CartSnapshot = cache.get(&cart_storage_key()).unwrap().unwrap();
        assert_eq!(saved.items[0].quantity, 3);

        cart.clear_cart();
        let saved: CartSnapshot = cache.get(&cart_storage_key()).unwrap().unwrap();
        assert!(saved.items.is_empty());
    }

    #[test]
    fn test_restore_from_missing_or_corrupt_is_empty() {
        let store = MemoryStore::new();
        assert!(CartStore::restore(store.clone()).is_empty());

        store.set(&cart_storage_key(), b"{ not json").unwrap();
        let cart = CartStore::restore(store.clone());
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);

        store.set(&cart_storage_key(), b"[1, 2, 3]").unwrap();
        assert!(CartStore::restore(store).is_empty());
    }

    #[test]
    fn test_restore_rejects_invalid_quantities() {
        let store = MemoryStore::new();
        let json = r#"{"items":[{"product_id":"1","name":"x","name_ar":"x",
            "price":{"amount_minor":1000,"currency":"KWD"},"image":"","quantity":0}]}"#;
        store.set(&cart_storage_key(), json.as_bytes()).unwrap();
        assert!(CartStore::restore(store.clone()).is_empty());

        // Prices are only ever in dinars.
        let json = json.replace(r#""quantity":0"#, r#""quantity":1"#).replace("KWD", "USD");
        store.set(&cart_storage_key(), json.as_bytes()).unwrap();
        assert!(CartStore::restore(store).is_empty());
    }

    #[test]
    fn test_listeners_fire_once_per_change() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::restore(MemoryStore::new());

        let sink = Rc::clone(&events);
        let id = cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        cart.add_item(snapshot("6"), None);
        cart.add_item(snapshot("6"), None);
        cart.update_quantity("missing", 2);
        cart.remove_item("missing");
        cart.update_quantity("6", 5);
        cart.update_quantity("6", 0);
        cart.clear_cart();

        let events = events.borrow();
        let changes: Vec<&CartChange> = events.iter().map(|e| &e.change).collect();
        assert_eq!(
            changes,
            vec![
                &CartChange::ItemAdded { product_id: "6".into(), quantity: 1 },
                &CartChange::ItemAdded { product_id: "6".into(), quantity: 2 },
                &CartChange::QuantityUpdated { product_id: "6".into(), quantity: 5 },
                &CartChange::ItemRemoved { product_id: "6".into() },
            ]
        );
        assert_eq!(events[2].totals.total_price, Money::kwd(475_000));
        assert_eq!(events.last().unwrap().revision, 4);
        assert_eq!(cart.revision(), 4);

        assert!(cart.unsubscribe(id));
        assert!(!cart.unsubscribe(id));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut cart = CartStore::restore(ReadOnlyStore);
        cart.add_item(snapshot("3"), None);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Money::kwd(1_250_000));
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut cart = CartStore::restore_with(store.clone(), "test:cart");
        cart.add_item(snapshot("5"), None);
        assert_eq!(cart.storage_key(), "test:cart");
        assert!(store.exists("test:cart").unwrap());
        assert!(!store.exists(&cart_storage_key()).unwrap());
    }
}
