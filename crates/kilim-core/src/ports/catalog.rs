//! Product catalog trait definition.
//!
//! The catalog is the external data source the storefront displays but does
//! not own. The port works with domain [`Product`] records; the HTTP client
//! implementing it maps its internal errors into [`CatalogError`] at this
//! boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Product;

/// Errors a catalog implementation may report through the port.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested product does not exist in the catalog.
    #[error("Product {id} not found in the catalog")]
    NotFound { id: u64 },

    /// The catalog API answered with an error status.
    #[error("Catalog request failed with status {status}: {url}")]
    Api { status: u16, url: String },

    /// The catalog could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with something that does not parse.
    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),
}

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch products, optionally capped to the first `limit` records.
    async fn list_products(&self, limit: Option<u32>) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product by id.
    async fn product(&self, id: u64) -> Result<Product, CatalogError>;

    /// Fetch the catalog's category names.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Fetch the products in one category, optionally capped to `limit`.
    async fn products_in_category(
        &self,
        category: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, CatalogError>;
}
