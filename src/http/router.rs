//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Selector domains
        .route("/states", get(handlers::list_states))
        .route("/metros", get(handlers::list_metros))
        .route("/defaults", get(handlers::get_defaults))
        .route("/weeks", get(handlers::get_weeks))
        // View projections
        .route("/map", get(handlers::get_map))
        .route("/trends", post(handlers::post_trends))
        .route("/table", post(handlers::post_table))
        .route("/export.csv", post(handlers::post_export))
        // Reference data
        .route("/sources", get(handlers::get_sources))
        .route("/shapes/{kind}", get(handlers::get_shapes));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
