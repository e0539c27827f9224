//! Command handlers.
//!
//! Each handler receives the composed [`CliContext`](crate::bootstrap::CliContext)
//! and delegates work to the `Storefront` facade; rendering stays here.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod products;
pub mod show;
