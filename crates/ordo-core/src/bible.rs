use serde::{Deserialize, Serialize};

use crate::citation::Citation;

/// The translations served alongside the daily readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Translation {
    #[serde(rename = "DRC")]
    Drc,
    Vulgate,
    VulgClementine,
}

impl Translation {
    pub const ALL: [Translation; 3] = [
        Translation::Drc,
        Translation::Vulgate,
        Translation::VulgClementine,
    ];

    /// File stem of the translation's JSON file.
    pub fn file_stem(self) -> &'static str {
        match self {
            Translation::Drc => "DRC",
            Translation::Vulgate => "Vulgate",
            Translation::VulgClementine => "VulgClementine",
        }
    }
}

/// A whole Bible in the `books / chapters / verses` JSON layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bible {
    #[serde(default)]
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u32,
    #[serde(default)]
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub verse: u32,
    pub text: String,
}

impl Bible {
    /// Text of one verse; book names compare case-insensitively.
    pub fn verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.books
            .iter()
            .find(|b| b.name.to_lowercase() == book.to_lowercase())?
            .chapters
            .iter()
            .find(|c| c.chapter == chapter)?
            .verses
            .iter()
            .find(|v| v.verse == verse)
            .map(|v| v.text.as_str())
    }

    pub fn lookup(&self, citation: &Citation) -> Option<&str> {
        self.verse(&citation.book, citation.chapter, citation.verse)
    }
}
