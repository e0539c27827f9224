//! Core domain types, ports, and services for the kilim storefront.
//!
//! This crate holds everything adapter-independent: the cart and catalog
//! domain model, the port traits adapters implement, the services composed
//! into the [`Storefront`] facade, and data-path resolution. Adapter crates
//! (`kilim-store`, `kilim-catalog`) and the CLI depend on this crate, never
//! the other way around.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Cart, CartAction, CartLineItem, NewLineItem, Product, ProductFilter, Rating, SortOrder,
};
pub use ports::{CartStore, CatalogError, NoopCartStore, ProductCatalog};
pub use services::{CartService, CatalogService, Storefront};

// Re-export path utilities
pub use paths::{CART_FILE_NAME, PathError, cart_file_path, data_root, ensure_directory};
