use std::sync::Arc;

use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordo_core::BibleStore;
use ordo_data::{BibleShelf, JsonOrdoStore};
use ordo_server::{create_router, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: ORDO_LISTEN_ADDR, ORDO_DATA_PATH, ORDO_BIBLE_DIR, ORDO_STATIC_DIR");
            eprintln!("Optional: ORDO_CYCLE_STYLE (liturgical|plain), ORDO_DATE (YYYY-MM-DD)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Ordo server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Ordo data: {}", config.data_path.display());
    tracing::info!("Cycle style: {:?}", config.cycle_style);
    if let Some(date) = config.fixed_date {
        tracing::info!("Serving fixed date {}", date);
    }

    // Load the generated calendar
    let ordo = match JsonOrdoStore::load(&config.data_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Ordo data error: {}", e);
            std::process::exit(1);
        }
    };

    // Missing translations are tolerated
    let bibles = BibleShelf::load_dir(&config.bible_dir);
    tracing::info!("Bible translations: {:?}", bibles.translations());

    let state = AppState::new(Arc::new(ordo), Arc::new(bibles), config.cycle_style)
        .with_fixed_date(config.fixed_date);
    tracing::info!("Loaded {} days", state.ordo.day_count());

    // Build router
    let app = create_router(state).nest_service("/static", ServeDir::new(&config.static_dir));

    // Start server
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running at http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
