use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;

use ordo_core::{render_entries, render_entry, Entry, EntryView};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ordo/today", get(get_today))
        .route("/ordo/today/fragment", get(get_today_fragment))
        .route("/ordo/today/view", get(get_today_view))
        .route("/ordo/{date}", get(get_on_date))
}

/// Entries for a day, or the error response to send instead.
pub(crate) fn load_entries(state: &AppState, date: NaiveDate) -> Result<Vec<Entry>, Response> {
    state.ordo.entries_on(date).map_err(|e| {
        tracing::error!("Failed to load entries for {}: {}", date, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Storage error: {}", e),
        )
            .into_response()
    })
}

/// GET /ordo/today - Today's entries as generated.
async fn get_today(State(state): State<AppState>) -> Response {
    match load_entries(&state, state.today()) {
        Ok(entries) => Json(entries).into_response(),
        Err(response) => response,
    }
}

/// GET /ordo/{date} - Entries for an ISO date.
async fn get_on_date(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid date, expected YYYY-MM-DD").into_response()
        }
    };

    match load_entries(&state, date) {
        Ok(entries) => Json(entries).into_response(),
        Err(response) => response,
    }
}

/// GET /ordo/today/fragment - Today's entries rendered as HTML.
async fn get_today_fragment(State(state): State<AppState>) -> Response {
    match load_entries(&state, state.today()) {
        Ok(entries) => Html(render_entries(&entries, state.cycle_style)).into_response(),
        Err(response) => response,
    }
}

/// GET /ordo/today/view - Today's entries as display data.
async fn get_today_view(State(state): State<AppState>) -> Response {
    match load_entries(&state, state.today()) {
        Ok(entries) => {
            let views: Vec<EntryView> = entries
                .iter()
                .map(|entry| render_entry(entry, state.cycle_style))
                .collect();
            Json(views).into_response()
        }
        Err(response) => response,
    }
}
