//! Catalog service - fetches products and applies client-side browsing.

use std::sync::Arc;

use crate::domain::{Product, ProductFilter, SortOrder, browse};
use crate::ports::{CatalogError, ProductCatalog};

/// Service for catalog reads.
pub struct CatalogService {
    catalog: Arc<dyn ProductCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Fetch products, optionally capped by the API.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Product>, CatalogError> {
        self.catalog.list_products(limit).await
    }

    /// Fetch a single product by id.
    pub async fn get(&self, id: u64) -> Result<Product, CatalogError> {
        self.catalog.product(id).await
    }

    /// Fetch the catalog's category names.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.catalog.categories().await
    }

    /// Fetch and narrow a product listing.
    ///
    /// When the filter names a category the fetch is narrowed server-side;
    /// price bounds and sorting are always applied client-side, and `limit`
    /// caps the final, sorted list.
    pub async fn browse(
        &self,
        filter: &ProductFilter,
        sort: Option<SortOrder>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = match filter.category {
            Some(ref category) => self.catalog.products_in_category(category, None).await?,
            None => self.catalog.list_products(None).await?,
        };

        let mut result = browse(products, filter, sort);
        if let Some(limit) = limit {
            result.truncate(limit);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;
    use async_trait::async_trait;

    struct FixedCatalog {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductCatalog for FixedCatalog {
        async fn list_products(&self, limit: Option<u32>) -> Result<Vec<Product>, CatalogError> {
            let mut products = self.products.clone();
            if let Some(limit) = limit {
                products.truncate(limit as usize);
            }
            Ok(products)
        }

        async fn product(&self, id: u64) -> Result<Product, CatalogError> {
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(CatalogError::NotFound { id })
        }

        async fn categories(&self) -> Result<Vec<String>, CatalogError> {
            let mut categories: Vec<String> =
                self.products.iter().map(|p| p.category.clone()).collect();
            categories.dedup();
            Ok(categories)
        }

        async fn products_in_category(
            &self,
            category: &str,
            limit: Option<u32>,
        ) -> Result<Vec<Product>, CatalogError> {
            let mut products: Vec<Product> = self
                .products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect();
            if let Some(limit) = limit {
                products.truncate(limit as usize);
            }
            Ok(products)
        }
    }

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(FixedCatalog {
            products: vec![
                product(1, "SSD", 89.0, "electronics"),
                product(2, "Silver Ring", 24.0, "jewelery"),
                product(3, "Monitor", 199.0, "electronics"),
            ],
        }))
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let err = service().get(42).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn test_browse_narrows_by_category() {
        let result = service()
            .browse(
                &ProductFilter {
                    category: Some("electronics".to_string()),
                    ..Default::default()
                },
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.category == "electronics"));
    }

    #[tokio::test]
    async fn test_browse_applies_price_filter_sort_and_limit() {
        let result = service()
            .browse(
                &ProductFilter {
                    max_price: Some(200.0),
                    ..Default::default()
                },
                Some(SortOrder::PriceDesc),
                Some(2),
            )
            .await
            .unwrap();

        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
