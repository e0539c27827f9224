//! Platform path detection and resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// File name of the durable cart document inside the data root.
///
/// This is the store's single fixed storage key; nothing else in the data
/// root is read or written by the cart subsystem.
pub const CART_FILE_NAME: &str = "cart.json";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `KILIM_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/kilim`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("KILIM_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("kilim"))
}

/// Location of the durable cart file.
pub fn cart_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(CART_FILE_NAME))
}

/// Ensure the provided directory exists, creating it (and parents) if missing.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
