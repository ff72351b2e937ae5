//! Entry rendering: a serializable view-model per entry and its HTML fragment.

use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::LiturgicalColor;
use crate::entry::{CycleKey, Entry};
use crate::error::UnknownCycleStyle;
use crate::format::{format_cycle_value, format_date, humanize};

/// Markup emitted when there is nothing to show for the day.
pub const NO_ENTRIES: &str = "<p>No entries for today.</p>";

/// How cycle values are written in the cycle block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStyle {
    /// "Year A", "Week II".
    #[default]
    Liturgical,
    /// Plain humanized tokens: "YEAR A", "WEEK 2".
    Plain,
}

impl CycleStyle {
    pub fn format(self, value: &str) -> String {
        match self {
            CycleStyle::Liturgical => format_cycle_value(value),
            CycleStyle::Plain => humanize(value),
        }
    }
}

impl FromStr for CycleStyle {
    type Err = UnknownCycleStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liturgical" => Ok(CycleStyle::Liturgical),
            "plain" => Ok(CycleStyle::Plain),
            _ => Err(UnknownCycleStyle(s.to_string())),
        }
    }
}

/// One color swatch with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub token: String,
    pub label: String,
    pub hex: &'static str,
}

/// One line of the cycle block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleLine {
    pub key: CycleKey,
    pub label: &'static str,
    pub value: String,
}

/// Display data derived from one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub title: String,
    pub date: String,
    pub rank: String,
    pub seasons: Vec<String>,
    pub colors: Vec<Swatch>,
    pub cycles: Vec<CycleLine>,
}

impl EntryView {
    /// Seasons joined for a single line.
    pub fn season_line(&self) -> String {
        self.seasons.join(", ")
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"<div class="ordo-entry"><div class="entry-row"><div class="title-and-meta"><h2 class="entry-title">{}</h2><p class="meta">{}</p><p><strong>Rank:</strong> {}</p><p><strong>Season:</strong> {}</p><div class="color-list">"#,
            escape_html(&self.title),
            escape_html(&self.date),
            escape_html(&self.rank),
            escape_html(&self.season_line()),
        );
        for swatch in &self.colors {
            let _ = write!(
                html,
                r#"<div class="swatch" style="background-color: {}"></div><span class="swatch-label">{}</span>"#,
                swatch.hex,
                escape_html(&swatch.label),
            );
        }
        html.push_str(r#"</div></div><div class="cycles"><h3>Liturgical Cycles</h3><ul>"#);
        for line in &self.cycles {
            let _ = write!(
                html,
                "<li><strong>{}:</strong> {}</li>",
                line.label,
                escape_html(&line.value),
            );
        }
        html.push_str("</ul></div></div></div>");

        html
    }
}

/// Build the view of a single entry.
pub fn render_entry(entry: &Entry, style: CycleStyle) -> EntryView {
    let colors = entry
        .colors
        .iter()
        .map(|token| Swatch {
            token: token.clone(),
            label: humanize(token),
            hex: LiturgicalColor::from_token(token).hex(),
        })
        .collect();

    let cycles = CycleKey::ALL
        .iter()
        .map(|&key| CycleLine {
            key,
            label: key.label(),
            value: entry
                .cycles
                .get(key)
                .map(|value| style.format(value))
                .unwrap_or_default(),
        })
        .collect();

    EntryView {
        title: humanize(&entry.id),
        date: format_date(&entry.date),
        rank: humanize(&entry.rank),
        seasons: entry.seasons.iter().map(|s| humanize(s)).collect(),
        colors,
        cycles,
    }
}

/// Render a day's entries as one HTML fragment, in input order.
pub fn render_entries(entries: &[Entry], style: CycleStyle) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    entries
        .iter()
        .map(|entry| render_entry(entry, style).to_html())
        .collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
