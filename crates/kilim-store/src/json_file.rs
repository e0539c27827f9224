//! JSON-file implementation of the `CartStore` port.
//!
//! The durable store is one file holding a JSON array of line items -
//! nothing else, no envelope, no version field. A schema change means a
//! compatible reader or a clear-and-reset; this matches the storage
//! contract the rest of the system assumes.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use kilim_core::{CartLineItem, CartStore};

/// Internal errors for the file store.
///
/// These never cross the `CartStore` boundary; they exist so the fallible
/// helpers compose with `?` before the trait methods absorb them.
#[derive(Debug, Error)]
enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed cart store.
///
/// All reads and writes touch the single configured path. The owning
/// facade is the sole writer of record; concurrent writers from other
/// processes are last-writer-wins by design.
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    /// Create a store backed by the given file path.
    ///
    /// The file and its parent directory do not need to exist yet; the
    /// first `save` creates them.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_items(&self) -> Result<Vec<CartLineItem>, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_items(&self, items: &[CartLineItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Vec<CartLineItem> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored cart, starting empty");
            return Vec::new();
        }

        match self.read_items() {
            Ok(items) => items,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable cart data");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartLineItem]) {
        if let Err(err) = self.write_items(items) {
            // The in-memory cart stays authoritative for the session; it
            // just won't survive the next reload.
            warn!(path = %self.path.display(), error = %err, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn line(id: u64, price: f64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id,
            title: format!("item-{id}"),
            price,
            image: "https://example.com/img.jpg".to_string(),
            category: "electronics".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = JsonFileCartStore::new(temp.path().join("cart.json"));

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let store = JsonFileCartStore::new(temp.path().join("cart.json"));
        let items = vec![line(1, 9.99, 2), line(2, 120.0, 1)];

        store.save(&items);
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let temp = tempdir().unwrap();
        let store = JsonFileCartStore::new(temp.path().join("cart.json"));

        store.save(&[line(1, 9.99, 2)]);
        store.save(&[line(3, 5.0, 1)]);

        assert_eq!(store.load(), vec![line(3, 5.0, 1)]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("data").join("kilim").join("cart.json");
        let store = JsonFileCartStore::new(&nested);

        store.save(&[line(1, 9.99, 1)]);

        assert!(nested.exists());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_malformed_file_loads_empty_without_panicking() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cart.json");
        fs::write(&path, "not-json").unwrap();

        let store = JsonFileCartStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cart.json");
        // Valid JSON, wrong schema.
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let store = JsonFileCartStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_stored_format_is_a_plain_array() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cart.json");
        let store = JsonFileCartStore::new(&path);

        store.save(&[line(7, 9.99, 2)]);

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = value.as_array().expect("top-level JSON array");
        assert_eq!(array[0]["id"], 7);
        assert_eq!(array[0]["quantity"], 2);
        assert_eq!(array[0]["category"], "electronics");
    }

    #[test]
    fn test_save_failure_is_absorbed() {
        let temp = tempdir().unwrap();
        // A directory at the target path makes the write fail.
        let path = temp.path().join("cart.json");
        fs::create_dir(&path).unwrap();

        let store = JsonFileCartStore::new(&path);
        store.save(&[line(1, 1.0, 1)]);
    }
}
