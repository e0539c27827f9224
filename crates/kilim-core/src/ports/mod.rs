//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or filesystem types in any signature
//! - Adapter-internal error types never cross a port boundary
//! - The cart store absorbs its own faults; the catalog reports via
//!   [`CatalogError`]

pub mod cart_store;
pub mod catalog;

pub use cart_store::{CartStore, NoopCartStore};
pub use catalog::{CatalogError, ProductCatalog};
