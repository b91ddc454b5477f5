//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs request method, path, status, and duration.
///
/// Paths under `/api/files/` carry access codes, so only the route prefix is
/// logged for them.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = loggable_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%method, path = %path, status = status.as_u16(), duration_ms, "HTTP request");
    } else {
        info!(%method, path = %path, status = status.as_u16(), duration_ms, "HTTP request");
    }

    response
}

fn loggable_path(path: &str) -> String {
    if path.starts_with("/api/files/") {
        "/api/files/{key}".to_string()
    } else {
        path.to_string()
    }
}
