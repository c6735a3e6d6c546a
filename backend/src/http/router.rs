//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The browser frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments win over `{game_id}`.
    let api = Router::new()
        .route("/averages", get(handlers::list_averages))
        .route("/defense/efficiency", get(handlers::list_defensive_efficiency))
        .route("/positions", get(handlers::list_positions))
        .route("/usage/top", get(handlers::list_top_usage))
        .route("/games", get(handlers::games_by_date))
        .route("/games/dates", get(handlers::list_game_dates))
        .route("/games/latest-date", get(handlers::latest_game_date))
        .route("/games/{game_id}", get(handlers::get_game));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
