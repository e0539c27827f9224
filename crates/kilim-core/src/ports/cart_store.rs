//! Cart store trait definition.
//!
//! This port defines the interface for durable cart persistence.
//! Implementations handle all storage details internally.

use crate::domain::CartLineItem;

/// Durable round-trip of the cart's item list under one fixed storage
/// location.
///
/// The contract is deliberately infallible: a cart is a non-critical cache
/// of purchase intent, and no storage fault may surface to the caller.
/// Implementations absorb their own errors:
///
/// - `load` returns an empty list when nothing is stored or the stored data
///   cannot be deserialized (after logging).
/// - `save` overwrites the whole collection; a failed write is logged and
///   dropped, leaving the in-memory cart authoritative for the session.
///
/// Neither method touches any storage location other than its single fixed
/// one, and neither may panic.
pub trait CartStore: Send + Sync {
    /// Load the persisted item list, or an empty list if absent or unreadable.
    fn load(&self) -> Vec<CartLineItem>;

    /// Persist the full item list, overwriting any prior value.
    fn save(&self, items: &[CartLineItem]);
}

/// Cart store for execution contexts with no durable storage.
///
/// Loads are always empty and saves are discarded. Lets the facade run
/// unchanged where nothing can persist, without ever erroring.
pub struct NoopCartStore;

impl CartStore for NoopCartStore {
    fn load(&self) -> Vec<CartLineItem> {
        Vec::new()
    }

    fn save(&self, _items: &[CartLineItem]) {}
}
