//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - The JSON-file cart store (via kilim-store)
//! - The HTTP catalog client (via kilim-catalog)
//! - The `Storefront` facade (via kilim-core)
//!
//! Hydration happens here too, exactly once per invocation, before any
//! command handler runs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use kilim_catalog::{CatalogConfig, DefaultCatalogClient};
use kilim_core::paths::{CART_FILE_NAME, cart_file_path};
use kilim_core::{CartStore, ProductCatalog, Storefront};
use kilim_store::JsonFileCartStore;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the durable cart file.
    pub cart_path: PathBuf,
    /// Catalog client configuration.
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            cart_path: cart_file_path()?,
            catalog: CatalogConfig::default(),
        })
    }

    /// Create config with the cart file under an explicit data directory.
    pub fn with_data_dir(dir: &str) -> Self {
        Self {
            cart_path: PathBuf::from(dir).join(CART_FILE_NAME),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    app: Storefront,
}

impl CliContext {
    /// Access the storefront facade.
    pub const fn app(&self) -> &Storefront {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// Wires the file-backed cart store and the HTTP catalog client into the
/// `Storefront`, then hydrates the cart from storage. This is the one
/// explicit hydration of the session; handlers never reload.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    let store: Arc<dyn CartStore> = Arc::new(JsonFileCartStore::new(&config.cart_path));
    let catalog: Arc<dyn ProductCatalog> = Arc::new(DefaultCatalogClient::new(&config.catalog));
    bootstrap_with(store, catalog)
}

/// Bootstrap with custom port implementations (for testing).
///
/// Hydrates exactly like [`bootstrap`] so tests observe the same lifecycle.
pub fn bootstrap_with(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> CliContext {
    let app = Storefront::new(store, catalog);
    app.cart().hydrate();
    CliContext { app }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kilim_core::{CartLineItem, CatalogError, Product};
    use kilim_store::InMemoryCartStore;

    struct StubCatalog {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductCatalog for StubCatalog {
        async fn list_products(&self, _limit: Option<u32>) -> Result<Vec<Product>, CatalogError> {
            Ok(self.products.clone())
        }

        async fn product(&self, id: u64) -> Result<Product, CatalogError> {
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(CatalogError::NotFound { id })
        }

        async fn categories(&self) -> Result<Vec<String>, CatalogError> {
            Ok(vec![])
        }

        async fn products_in_category(
            &self,
            category: &str,
            _limit: Option<u32>,
        ) -> Result<Vec<Product>, CatalogError> {
            Ok(self
                .products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect())
        }
    }

    fn line(id: u64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id,
            title: format!("item-{id}"),
            price: 10.0,
            image: String::new(),
            category: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_bootstrap_hydrates_persisted_cart() {
        let store = Arc::new(InMemoryCartStore::with_items(vec![line(1, 2)]));
        let ctx = bootstrap_with(store, Arc::new(StubCatalog { products: vec![] }));

        assert_eq!(ctx.app().cart().total_item_count(), 2);
    }

    #[test]
    fn test_config_with_data_dir_points_at_cart_file() {
        let config = CliConfig::with_data_dir("/tmp/kilim-test");
        assert_eq!(
            config.cart_path,
            PathBuf::from("/tmp/kilim-test").join(CART_FILE_NAME)
        );
    }

    #[test]
    fn test_cart_survives_across_invocations() {
        let temp = tempfile::tempdir().unwrap();
        let config = CliConfig::with_data_dir(temp.path().to_string_lossy().as_ref());

        // First "session": mutate and let the file store persist.
        {
            let store = Arc::new(JsonFileCartStore::new(&config.cart_path));
            let ctx = bootstrap_with(store, Arc::new(StubCatalog { products: vec![] }));
            ctx.app().cart().add_item(kilim_core::NewLineItem {
                id: 1,
                title: "Rug".to_string(),
                price: 120.0,
                image: String::new(),
                category: "home".to_string(),
            });
        }

        // Second "session": a fresh bootstrap hydrates what the first wrote.
        let store = Arc::new(JsonFileCartStore::new(&config.cart_path));
        let ctx = bootstrap_with(store, Arc::new(StubCatalog { products: vec![] }));

        assert_eq!(ctx.app().cart().total_item_count(), 1);
        assert_eq!(ctx.app().cart().items()[0].title, "Rug");
    }
}
