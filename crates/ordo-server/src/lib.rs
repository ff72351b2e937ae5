//! Ordo Server - Axum server for the daily Ordo page and its JSON API.

pub mod config;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::create_router;
pub use state::AppState;
