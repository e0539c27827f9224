#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
// Allow private types in public type alias - DefaultCatalogClient is meant to
// be used through the ProductCatalog trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::CatalogConfig;
