use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use ordo_core::Translation;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    days: usize,
    translations: Vec<Translation>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    // Data is loaded before the listener binds.
    Json(ReadyResponse {
        status: "ok",
        days: state.ordo.day_count(),
        translations: state.bibles.translations(),
    })
}
