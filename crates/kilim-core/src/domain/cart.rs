//! Cart domain types and the cart reducer.
//!
//! The cart is an ordered collection of line items keyed by product id.
//! All state transitions go through [`Cart::apply`], which is pure: no I/O,
//! no logging, deterministic. Persistence and presentation live elsewhere.

use serde::{Deserialize, Serialize};

/// One product entry in the cart, with its own quantity.
///
/// `title`, `price`, `image`, and `category` are snapshotted when the item
/// is first added and are never re-synced from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Catalog id of the product. Unique within a cart.
    pub id: u64,
    /// Display name at time of add.
    pub title: String,
    /// Unit price at time of add.
    pub price: f64,
    /// Image URL or identifier; resolution is the presentation layer's concern.
    pub image: String,
    /// Product category, used for display only.
    pub category: String,
    /// Always >= 1. An item that would reach 0 is removed instead.
    pub quantity: u32,
}

/// Descriptor for adding a product to the cart: a line item without a
/// quantity. Built from a catalog [`Product`](super::Product).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl NewLineItem {
    fn into_line_item(self) -> CartLineItem {
        CartLineItem {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            category: self.category,
            quantity: 1,
        }
    }
}

/// State transitions the cart reducer accepts.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a product. Merging on an existing id increments its
    /// quantity and ignores the incoming descriptor's other fields.
    Add(NewLineItem),
    /// Delete the line item with this id, if present.
    Remove(u64),
    /// Set a line item's quantity to an absolute value. A value <= 0 removes
    /// the item; an absent id is a no-op.
    SetQuantity { id: u64, quantity: i64 },
    /// Empty the cart.
    Clear,
}

/// The cart aggregate: line items in insertion order, at most one per id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from a previously persisted item list.
    #[must_use]
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one action and produce the next state in place.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(new_item) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.id == new_item.id) {
                    existing.quantity += 1;
                } else {
                    self.items.push(new_item.into_line_item());
                }
            }
            CartAction::Remove(id) => {
                self.items.retain(|i| i.id != id);
            }
            CartAction::SetQuantity { id, quantity } => {
                if quantity <= 0 {
                    self.items.retain(|i| i.id != id);
                } else if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                    item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                }
            }
            CartAction::Clear => {
                self.items.clear();
            }
        }
    }

    /// Sum of all quantities. Recomputed on every call.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price * quantity` over all items. Recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }
}
