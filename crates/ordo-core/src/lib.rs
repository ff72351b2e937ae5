//! Ordo Core - Domain models, token formatting and entry rendering.
//!
//! This crate turns the machine tokens of a pre-generated liturgical
//! calendar into readable text and display fragments. It has no
//! dependencies on other Ordo crates and performs no I/O.

pub mod bible;
pub mod citation;
pub mod color;
pub mod entry;
pub mod error;
pub mod format;
pub mod reading;
pub mod render;
pub mod storage;
pub mod theme;

// Re-exports for convenience
pub use bible::{Bible, Translation};
pub use citation::Citation;
pub use color::LiturgicalColor;
pub use entry::{CycleKey, Cycles, Entry, OrdoBook};
pub use error::{CitationError, StorageError, UnknownCycleStyle};
pub use format::{format_cycle_value, format_date, humanize, long_date, INVALID_DATE};
pub use reading::{readings_for, DailyReadings, Reading};
pub use render::{
    render_entries, render_entry, CycleLine, CycleStyle, EntryView, Swatch, NO_ENTRIES,
};
pub use storage::{BibleStore, OrdoStore};
pub use theme::{Theme, ThemeState};

#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::{InMemoryBibleStore, InMemoryOrdoStore};
