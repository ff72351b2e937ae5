use std::path::Path;

use chrono::NaiveDate;

use ordo_core::{Entry, OrdoBook, OrdoStore, StorageError};

use crate::read_json;

/// Ordo book loaded once from a generated JSON file.
pub struct JsonOrdoStore {
    book: OrdoBook,
}

impl JsonOrdoStore {
    /// Load a file shaped as `{ "YYYY-MM-DD": [entry, ...], ... }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let book: OrdoBook = read_json(path)?;
        tracing::debug!("Loaded {} days from {}", book.len(), path.display());
        Ok(Self { book })
    }
}

impl OrdoStore for JsonOrdoStore {
    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>, StorageError> {
        Ok(self.book.entries_on(date).to_vec())
    }

    fn day_count(&self) -> usize {
        self.book.len()
    }
}
