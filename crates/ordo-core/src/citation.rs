use serde::Serialize;

use crate::error::CitationError;

/// A single-verse scripture reference such as "Genesis 1:1" or "1 Kings 3:4".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Citation {
    /// Parse "Book C:V". The book is everything before the last whitespace,
    /// so numbered books keep their prefix.
    pub fn parse(citation: &str) -> Result<Self, CitationError> {
        let trimmed = citation.trim();
        let (book, chapter_verse) = trimmed
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| CitationError::MissingBook(citation.to_string()))?;

        let book = book.trim();
        if book.is_empty() {
            return Err(CitationError::MissingBook(citation.to_string()));
        }

        let (chapter, verse) = chapter_verse
            .split_once(':')
            .ok_or_else(|| CitationError::MissingVerse(citation.to_string()))?;

        let chapter = chapter
            .parse()
            .map_err(|_| CitationError::InvalidNumber(citation.to_string()))?;
        let verse = verse
            .parse()
            .map_err(|_| CitationError::InvalidNumber(citation.to_string()))?;

        Ok(Self {
            book: book.to_string(),
            chapter,
            verse,
        })
    }
}
