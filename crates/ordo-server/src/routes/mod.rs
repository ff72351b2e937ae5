pub mod health;
pub mod ordo;
pub mod pages;
pub mod readings;
pub mod theme;

use axum::Router;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(ordo::routes())
        .merge(readings::routes())
        .merge(theme::routes())
        .merge(health::routes())
        .with_state(state)
}
