use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use ordo_core::Theme;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/theme", get(get_theme).put(set_theme))
        .route("/api/theme/toggle", post(toggle_theme))
        .route("/theme/toggle", post(toggle_theme_form))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

async fn get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.theme.get(),
    })
}

async fn set_theme(State(state): State<AppState>, Json(body): Json<ThemeBody>) -> Json<ThemeBody> {
    state.theme.set(body.theme);
    tracing::debug!("Theme set to {:?}", body.theme);
    Json(body)
}

async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.theme.toggle(),
    })
}

/// Toggle from the page's form and go back to it.
async fn toggle_theme_form(State(state): State<AppState>) -> Redirect {
    state.theme.toggle();
    Redirect::to("/")
}
