//! Route definitions for the CodeVault HTTP API.
//!
//! JSON routes are mounted under `/api`; blob content is served from
//! `/uploads/{storedName}` with `/blob/{storedName}` as an alias.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.storage.max_request_body_bytes();

    let api_routes = Router::new()
        .merge(upload_routes())
        .merge(file_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(body_limit));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(blob_routes())
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Multipart upload
fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(handlers::upload::upload_files))
}

/// Listing by access code and delete by id share one path
fn file_routes() -> Router<AppState> {
    Router::new().route(
        "/files/{key}",
        get(handlers::files::list_files).delete(handlers::files::delete_file),
    )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Raw blob content
fn blob_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/{stored_name}", get(handlers::blob::get_blob))
        .route("/blob/{stored_name}", get(handlers::blob::get_blob))
}
