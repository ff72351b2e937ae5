use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the root element's `data-theme` attribute, if any.
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// Process-wide theme, shared between handlers.
#[derive(Debug, Default)]
pub struct ThemeState {
    current: RwLock<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> Theme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, theme: Theme) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = theme;
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&self) -> Theme {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = current.toggled();
        *current
    }
}
