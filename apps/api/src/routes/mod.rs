pub mod health;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::quotes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/quote/original", get(handlers::handle_original))
        .route("/quote/famous", get(handlers::handle_famous))
        // Front end
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
