//! Cart service - the facade presentation code drives the cart through.
//!
//! Holds the in-memory cart and the injected [`CartStore`]. Every mutation
//! applies the reducer and then persists the resulting item list while the
//! same lock is held, so no other mutation can interleave between the state
//! transition and its paired write. Nothing here returns an error: storage
//! faults are absorbed inside the store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::{Cart, CartAction, CartLineItem, NewLineItem};
use crate::ports::CartStore;

/// Service owning the cart state and its persistence.
pub struct CartService {
    store: Arc<dyn CartStore>,
    cart: Mutex<Cart>,
}

impl CartService {
    /// Create a cart service with the given store.
    ///
    /// The cart starts empty; the composition root calls [`Self::hydrate`]
    /// once at session start to load persisted state.
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            store,
            cart: Mutex::new(Cart::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A poisoned lock only means a panic elsewhere; the cart data is
        // still coherent, so keep serving it.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace in-memory state wholesale with whatever the store holds.
    ///
    /// One durable read, zero writes. Idempotent: repeated calls with
    /// unchanged storage leave the state unchanged.
    pub fn hydrate(&self) {
        let items = self.store.load();
        debug!(count = items.len(), "cart hydrated from store");
        *self.lock() = Cart::from_items(items);
    }

    /// Add one unit of a product (quantity merge on an existing id).
    pub fn add_item(&self, item: NewLineItem) {
        self.dispatch(CartAction::Add(item));
    }

    /// Remove a line item. Absent ids are a no-op.
    pub fn remove_item(&self, id: u64) {
        self.dispatch(CartAction::Remove(id));
    }

    /// Set a line item's quantity; values <= 0 remove it.
    pub fn set_quantity(&self, id: u64, quantity: i64) {
        self.dispatch(CartAction::SetQuantity { id, quantity });
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.dispatch(CartAction::Clear);
    }

    // Mutate-then-persist under one lock. Exactly one durable write per
    // dispatched action; a failed write leaves memory authoritative.
    fn dispatch(&self, action: CartAction) {
        let mut cart = self.lock();
        cart.apply(action);
        self.store.save(cart.items());
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartLineItem> {
        self.lock().items().to_vec()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sum of all quantities. Recomputed on every call.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lock().total_item_count()
    }

    /// Sum of `price * quantity`. Recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lock().total_price()
    }
}
