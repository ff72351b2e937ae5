use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;

use ordo_core::{long_date, render_entries, CycleStyle, Entry, Theme};

use crate::routes::ordo::load_entries;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Response {
    let today = state.today();
    match load_entries(&state, today) {
        Ok(entries) => Html(render_index(
            today,
            &entries,
            state.cycle_style,
            state.theme.get(),
        ))
        .into_response(),
        Err(response) => response,
    }
}

fn render_index(today: NaiveDate, entries: &[Entry], style: CycleStyle, theme: Theme) -> String {
    let theme_attr = theme
        .data_attribute()
        .map(|t| format!(r#" data-theme="{t}""#))
        .unwrap_or_default();
    let today = long_date(today);
    let ordo = render_entries(entries, style);

    format!(
        r##"<!DOCTYPE html>
<html lang="en"{theme_attr}>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Ordo</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header>
        <h1>Ordo</h1>
        <p class="today">{today}</p>
        <form method="post" action="/theme/toggle">
            <button type="submit" id="toggleTheme">Toggle theme</button>
        </form>
    </header>

    <main id="ordoContainer">
        {ordo}
    </main>
</body>
</html>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn christmas() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
    }

    #[test]
    fn test_index_without_entries() {
        let html = render_index(christmas(), &[], CycleStyle::Liturgical, Theme::Light);

        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("December 25, 2025"));
        assert!(html.contains(ordo_core::NO_ENTRIES));
    }

    #[test]
    fn test_index_dark_theme() {
        let entries = vec![Entry::new("nativity_of_the_lord", "2025-12-25", "SOLEMNITY")];
        let html = render_index(christmas(), &entries, CycleStyle::Liturgical, Theme::Dark);

        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
        assert!(html.contains("Nativity Of The Lord"));
    }
}
