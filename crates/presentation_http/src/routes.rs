//! Route definitions

use axum::routing::get;
use axum::Router;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Form page and classification
        .route(
            "/",
            get(handlers::classify::index).post(handlers::classify::classify),
        )
        // Stored upload retrieval
        .route("/uploads/{filename}", get(handlers::uploads::download))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
