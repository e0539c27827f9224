//! In-memory implementation of the `CartStore` port.

use std::sync::{Mutex, PoisonError};

use kilim_core::{CartLineItem, CartStore};

/// Cart store holding its data in process memory.
///
/// Substitution backend for tests and for runs that should not touch the
/// filesystem. Contents vanish with the process.
#[derive(Default)]
pub struct InMemoryCartStore {
    items: Mutex<Vec<CartLineItem>>,
}

impl InMemoryCartStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with items, as if persisted earlier.
    #[must_use]
    pub fn with_items(items: Vec<CartLineItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl CartStore for InMemoryCartStore {
    fn load(&self) -> Vec<CartLineItem> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, items: &[CartLineItem]) {
        *self.items.lock().unwrap_or_else(PoisonError::into_inner) = items.to_vec();
    }
}
