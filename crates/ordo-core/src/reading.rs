use chrono::NaiveDate;
use serde::Serialize;

use crate::bible::Translation;
use crate::citation::Citation;
use crate::entry::Entry;
use crate::storage::BibleStore;

/// Verse texts of one citation in every translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub citation: String,
    #[serde(rename = "DRC")]
    pub drc: Option<String>,
    #[serde(rename = "Vulgate")]
    pub vulgate: Option<String>,
    #[serde(rename = "VulgClementine")]
    pub vulg_clementine: Option<String>,
}

/// One Ordo entry together with the readings of its citations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReadings {
    pub date: String,
    pub ordo_entry: Entry,
    pub readings: Vec<Reading>,
}

/// Resolve the citations of each entry against the loaded Bibles.
///
/// Citations that do not parse are skipped.
pub fn readings_for(
    date: NaiveDate,
    entries: &[Entry],
    bibles: &dyn BibleStore,
) -> Vec<DailyReadings> {
    let date = date.format("%Y-%m-%d").to_string();

    entries
        .iter()
        .map(|entry| DailyReadings {
            date: date.clone(),
            ordo_entry: entry.clone(),
            readings: entry
                .citations
                .iter()
                .filter_map(|raw| {
                    let citation = Citation::parse(raw).ok()?;
                    Some(Reading {
                        citation: raw.clone(),
                        drc: bibles.verse(Translation::Drc, &citation),
                        vulgate: bibles.verse(Translation::Vulgate, &citation),
                        vulg_clementine: bibles.verse(Translation::VulgClementine, &citation),
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::Bible;
    use crate::storage::memory::InMemoryBibleStore;

    fn drc() -> Bible {
        serde_json::from_str(
            r#"{"books": [{"name": "John", "chapters": [
                {"chapter": 1, "verses": [{"verse": 1, "text": "In the beginning was the Word"}]}
            ]}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_readings_resolve_and_skip() {
        let bibles = InMemoryBibleStore::new().with(Translation::Drc, drc());
        let entry = Entry {
            citations: vec![
                "John 1:1".to_string(),
                "not a citation".to_string(),
                "John 1:2".to_string(),
            ],
            ..Entry::new("nativity_of_the_lord", "2025-12-25", "SOLEMNITY")
        };
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();

        let days = readings_for(date, &[entry], &bibles);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2025-12-25");
        let readings = &days[0].readings;
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].citation, "John 1:1");
        assert_eq!(
            readings[0].drc.as_deref(),
            Some("In the beginning was the Word")
        );
        assert_eq!(readings[0].vulgate, None);
        assert_eq!(readings[1].drc, None);
    }

    #[test]
    fn test_reading_json_keys() {
        let reading = Reading {
            citation: "John 1:1".to_string(),
            drc: Some("x".to_string()),
            vulgate: None,
            vulg_clementine: None,
        };
        let value = serde_json::to_value(&reading).unwrap();

        assert_eq!(value["DRC"], "x");
        assert!(value["Vulgate"].is_null());
        assert!(value["VulgClementine"].is_null());
    }

    #[test]
    fn test_no_entries_no_readings() {
        let bibles = InMemoryBibleStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(readings_for(date, &[], &bibles).is_empty());
    }
}
