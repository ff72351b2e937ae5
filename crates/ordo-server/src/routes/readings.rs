use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use ordo_core::readings_for;

use crate::routes::ordo::load_entries;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/readings/today", get(get_readings_today))
}

/// GET /readings/today - Verse texts for the citations of today's entries.
async fn get_readings_today(State(state): State<AppState>) -> Response {
    let today = state.today();
    match load_entries(&state, today) {
        Ok(entries) => Json(readings_for(today, &entries, state.bibles.as_ref())).into_response(),
        Err(response) => response,
    }
}
