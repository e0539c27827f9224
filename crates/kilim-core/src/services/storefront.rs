//! `Storefront` - the primary application facade.
//!
//! Adapters (CLI, tests) receive a `Storefront` instance constructed at
//! their composition root with concrete port implementations. There is no
//! global instance: whoever composes the application owns it and passes it
//! down explicitly.

use std::sync::Arc;

use crate::ports::{CartStore, ProductCatalog};

use super::{CartService, CatalogService};

/// The storefront facade.
///
/// # Example
///
/// ```ignore
/// let store: Arc<dyn CartStore> = Arc::new(JsonFileCartStore::new(path));
/// let catalog: Arc<dyn ProductCatalog> = Arc::new(DefaultCatalogClient::new(&config));
/// let app = Storefront::new(store, catalog);
///
/// app.cart().hydrate();
/// let items = app.cart().items();
/// ```
pub struct Storefront {
    cart: CartService,
    catalog: CatalogService,
}

impl Storefront {
    /// Create a new `Storefront` with the given cart store and catalog.
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            cart: CartService::new(store),
            catalog: CatalogService::new(catalog),
        }
    }

    /// Access the cart service.
    pub const fn cart(&self) -> &CartService {
        &self.cart
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }
}
