use std::collections::HashMap;
use std::path::Path;

use ordo_core::{Bible, BibleStore, Citation, Translation};

use crate::read_json;

/// The Bible translations found in one directory.
#[derive(Default)]
pub struct BibleShelf {
    bibles: HashMap<Translation, Bible>,
}

impl BibleShelf {
    /// Load `DRC.json`, `Vulgate.json` and `VulgClementine.json` from `dir`.
    ///
    /// A translation whose file is missing or unreadable is skipped with a
    /// warning; its verses then resolve to `None`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut shelf = Self::default();

        for translation in Translation::ALL {
            let path = dir.join(format!("{}.json", translation.file_stem()));
            match read_json::<Bible>(&path) {
                Ok(bible) => {
                    tracing::info!(
                        "Loaded {} ({} books)",
                        translation.file_stem(),
                        bible.books.len()
                    );
                    shelf.bibles.insert(translation, bible);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", translation.file_stem(), e);
                }
            }
        }

        shelf
    }
}

impl BibleStore for BibleShelf {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VULGATE: &str = r#"{"books": [{"name": "Genesis", "chapters": [
        {"chapter": 1, "verses": [{"verse": 1, "text": "In principio creavit Deus caelum et terram."}]}
    ]}]}"#;

    #[test]
    fn test_load_dir_with_missing_translations() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Vulgate.json"), VULGATE).unwrap();
        std::fs::write(dir.path().join("DRC.json"), "not json").unwrap();

        let shelf = BibleShelf::load_dir(dir.path());
        let citation = Citation::parse("Genesis 1:1").unwrap();

        assert_eq!(shelf.translations(), vec![Translation::Vulgate]);
        assert_eq!(
            shelf.verse(Translation::Vulgate, &citation).as_deref(),
            Some("In principio creavit Deus caelum et terram.")
        );
        assert_eq!(shelf.verse(Translation::Drc, &citation), None);
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempdir().unwrap();
        let shelf = BibleShelf::load_dir(dir.path());
        assert!(shelf.translations().is_empty());
    }
}
