//! Catalog product records and pure browse helpers.
//!
//! [`Product`] mirrors the catalog API's wire format. The filter/sort
//! helpers run client-side over an already-fetched product list, the same
//! way the products page narrows what it displays.

use serde::{Deserialize, Serialize};

use super::cart::NewLineItem;

/// Aggregate customer rating attached to a catalog product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A product record as returned by the catalog API.
///
/// The cart only consumes the `{id, title, price, image, category}` subset;
/// `description` and `rating` exist for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl From<&Product> for NewLineItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Client-side filter over a product list.
///
/// `category` is an exact match; the price bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Whether a product passes every configured criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Sort orders for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

/// Filter and sort a product list client-side.
#[must_use]
pub fn browse(products: Vec<Product>, filter: &ProductFilter, sort: Option<SortOrder>) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.into_iter().filter(|p| filter.matches(p)).collect();

    if let Some(order) = sort {
        filtered.sort_by(|a, b| match order {
            SortOrder::PriceAsc => a.price.total_cmp(&b.price),
            SortOrder::PriceDesc => b.price.total_cmp(&a.price),
            SortOrder::TitleAsc => a.title.cmp(&b.title),
            SortOrder::TitleDesc => b.title.cmp(&a.title),
        });
    }

    filtered
}
