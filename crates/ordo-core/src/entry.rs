use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One Ordo entry for a single day, as produced by the calendar generator.
///
/// Every field tolerates being missing or `null`; fields the generator emits
/// that are not modelled here are kept in `extra` so the entry serializes
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub rank: String,
    #[serde(deserialize_with = "nullable")]
    pub seasons: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub colors: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub cycles: Cycles,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            rank: rank.into(),
            ..Self::default()
        }
    }
}

/// The four cycle indices of a day. Any of them may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cycles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proper_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psalter_week: Option<String>,
}

impl Cycles {
    /// Raw token for a key; empty strings count as absent.
    pub fn get(&self, key: CycleKey) -> Option<&str> {
        let value = match key {
            CycleKey::ProperCycle => &self.proper_cycle,
            CycleKey::SundayCycle => &self.sunday_cycle,
            CycleKey::WeekdayCycle => &self.weekday_cycle,
            CycleKey::PsalterWeek => &self.psalter_week,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Closed set of cycle keys, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleKey {
    ProperCycle,
    SundayCycle,
    WeekdayCycle,
    PsalterWeek,
}

impl CycleKey {
    pub const ALL: [CycleKey; 4] = [
        CycleKey::ProperCycle,
        CycleKey::SundayCycle,
        CycleKey::WeekdayCycle,
        CycleKey::PsalterWeek,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CycleKey::ProperCycle => "Proper Cycle",
            CycleKey::SundayCycle => "Sunday Cycle",
            CycleKey::WeekdayCycle => "Weekday Cycle",
            CycleKey::PsalterWeek => "Psalter Week",
        }
    }
}

/// A generated calendar: entries grouped by day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrdoBook {
    days: BTreeMap<NaiveDate, Vec<Entry>>,
}

impl OrdoBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for a day, in generator order. Unknown days are empty.
    pub fn entries_on(&self, date: NaiveDate) -> &[Entry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn insert(&mut self, date: NaiveDate, entries: Vec<Entry>) {
        self.days.insert(date, entries);
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
