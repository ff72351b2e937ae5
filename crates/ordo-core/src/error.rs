use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CitationError {
    #[error("Missing book name in citation: {0:?}")]
    MissingBook(String),

    #[error("Expected chapter:verse in citation: {0:?}")]
    MissingVerse(String),

    #[error("Invalid chapter or verse number in citation: {0:?}")]
    InvalidNumber(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown cycle style {0:?}: expected \"liturgical\" or \"plain\"")]
pub struct UnknownCycleStyle(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_error_display() {
        let err = CitationError::MissingVerse("Genesis 1".to_string());
        assert_eq!(
            err.to_string(),
            "Expected chapter:verse in citation: \"Genesis 1\""
        );
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Read {
            path: "ordo.json".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to read ordo.json: not found");
    }
}
