//! Core services, composed into the [`Storefront`] facade.

pub mod cart_service;
pub mod catalog_service;
pub mod storefront;

pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use storefront::Storefront;
