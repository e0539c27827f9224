//! Domain types for the storefront.
//!
//! These are pure types with no infrastructure dependencies: the cart and
//! its reducer, and the catalog product records the storefront displays.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartAction, CartLineItem, NewLineItem};
pub use product::{Product, ProductFilter, Rating, SortOrder, browse};
