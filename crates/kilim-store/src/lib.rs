//! Cart persistence backends.
//!
//! Implementations of the `CartStore` port from `kilim-core`: a JSON-file
//! store for durable sessions and an in-memory store for tests and
//! ephemeral runs. Per the port contract, nothing in this crate lets a
//! storage fault reach the caller - faults are logged and absorbed here.

#![deny(unsafe_code)]

mod json_file;
mod memory;

pub use json_file::JsonFileCartStore;
pub use memory::InMemoryCartStore;
