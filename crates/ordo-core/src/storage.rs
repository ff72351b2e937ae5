use chrono::NaiveDate;

use crate::bible::Translation;
use crate::citation::Citation;
use crate::entry::Entry;
use crate::error::StorageError;

/// Source of generated Ordo entries.
pub trait OrdoStore: Send + Sync {
    /// Entries for a day, in generator order. A day with no entries is an
    /// empty vector, not an error.
    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>, StorageError>;

    /// Number of days the store covers.
    fn day_count(&self) -> usize;
}

/// Source of verse texts per translation.
pub trait BibleStore: Send + Sync {
    /// Verse text for a citation, or None if the translation is not loaded
    /// or does not contain the verse.
    fn verse(&self, translation: Translation, citation: &Citation) -> Option<String>;

    /// Translations actually available.
    fn translations(&self) -> Vec<Translation>;
}

// In-memory implementations for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    use crate::bible::Bible;
    use crate::entry::OrdoBook;

    /// In-memory Ordo store for testing.
    #[derive(Default)]
    pub struct InMemoryOrdoStore {
        book: RwLock<OrdoBook>,
    }

    impl InMemoryOrdoStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&self, date: NaiveDate, entries: Vec<Entry>) {
            self.book.write().unwrap().insert(date, entries);
        }
    }

    impl OrdoStore for InMemoryOrdoStore {
        fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>, StorageError> {
            Ok(self.book.read().unwrap().entries_on(date).to_vec())
        }

        fn day_count(&self) -> usize {
            self.book.read().unwrap().len()
        }
    }

    /// In-memory Bible store for testing.
    #[derive(Default)]
    pub struct InMemoryBibleStore {
        bibles: HashMap<Translation, Bible>,
    }

    impl InMemoryBibleStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, translation: Translation, bible: Bible) -> Self {
            self.bibles.insert(translation, bible);
            self
        }
    }

    impl BibleStore for InMemoryBibleStore {
        fn verse(&self, translation: Translation, citation: &Citation) -> Option<String> {
            self.bibles
                .get(&translation)?
                .lookup(citation)
                .map(str::to_owned)
        }

        fn translations(&self) -> Vec<Translation> {
            Translation::ALL
                .into_iter()
                .filter(|t| self.bibles.contains_key(t))
                .collect()
        }
    }

}
