use std::sync::Arc;

use chrono::NaiveDate;

use ordo_core::{BibleStore, CycleStyle, OrdoStore, ThemeState};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub ordo: Arc<dyn OrdoStore>,
    pub bibles: Arc<dyn BibleStore>,
    pub theme: Arc<ThemeState>,
    pub cycle_style: CycleStyle,
    pub fixed_date: Option<NaiveDate>,
}

impl AppState {
    pub fn new(
        ordo: Arc<dyn OrdoStore>,
        bibles: Arc<dyn BibleStore>,
        cycle_style: CycleStyle,
    ) -> Self {
        Self {
            ordo,
            bibles,
            theme: Arc::new(ThemeState::default()),
            cycle_style,
            fixed_date: None,
        }
    }

    pub fn with_fixed_date(mut self, date: Option<NaiveDate>) -> Self {
        self.fixed_date = date;
        self
    }

    /// The day being served: the fixed date if configured, else the local date.
    pub fn today(&self) -> NaiveDate {
        self.fixed_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
