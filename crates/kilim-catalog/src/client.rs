//! Catalog client implementing the `ProductCatalog` port.

use async_trait::async_trait;
use url::Url;

use kilim_core::{CatalogError, Product, ProductCatalog};

use crate::config::CatalogConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the product catalog API.
///
/// Generic over an HTTP backend so tests can run against canned responses.
/// External code should construct `DefaultCatalogClient` and use it through
/// the `ProductCatalog` trait.
pub struct CatalogClient<B: HttpBackend> {
    backend: B,
    base_url: String,
}

impl DefaultCatalogClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            backend: ReqwestBackend::new(config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a client with a custom backend, for testing.
    #[cfg(test)]
    fn with_backend(base_url: &str, backend: B) -> Self {
        Self {
            backend,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build an endpoint URL under the base, with an optional `limit` query.
    fn endpoint(&self, path: &str, limit: Option<u32>) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))?;
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }

    async fn get_products(&self, path: &str, limit: Option<u32>) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(path, limit)?;
        self.backend.get_json(&url).await
    }
}

#[async_trait]
impl<B: HttpBackend> ProductCatalog for CatalogClient<B> {
    async fn list_products(&self, limit: Option<u32>) -> Result<Vec<Product>, CatalogError> {
        Ok(self.get_products("products", limit).await?)
    }

    async fn product(&self, id: u64) -> Result<Product, CatalogError> {
        let url = self.endpoint(&format!("products/{id}"), None)?;
        Ok(self.backend.get_json(&url).await?)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint("products/categories", None)?;
        Ok(self.backend.get_json(&url).await?)
    }

    async fn products_in_category(
        &self,
        category: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, CatalogError> {
        // Categories contain spaces and apostrophes ("men's clothing"), so
        // the path segment must be percent-encoded.
        let path = format!("products/category/{}", urlencoding::encode(category));
        Ok(self.get_products(&path, limit).await?)
    }
}
