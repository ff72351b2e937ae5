//! Ordo Data - file-backed implementations of the storage traits.

pub mod bible_shelf;
pub mod ordo_store;

pub use bible_shelf::BibleShelf;
pub use ordo_store::JsonOrdoStore;

use std::path::Path;

use serde::de::DeserializeOwned;

use ordo_core::StorageError;

/// Read and parse one JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = std::fs::read_to_string(path).map_err(|e| StorageError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| StorageError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
