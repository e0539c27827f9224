//! CLI crate for the kilim storefront.
//!
//! Command parsing, the composition-root bootstrap, and the handlers that
//! render catalog and cart state to the terminal.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod cart_commands;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use cart_commands::CartCommand;
pub use commands::{Commands, SortArg};
pub use parser::Cli;
