//! Path utilities for kilim data locations.
//!
//! Provides the canonical resolution of where the durable cart file lives.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic stays private in `platform`

mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use error::PathError;
pub use platform::{CART_FILE_NAME, cart_file_path, data_root, ensure_directory};
