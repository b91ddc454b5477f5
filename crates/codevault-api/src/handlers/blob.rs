//! Raw blob retrieval.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use codevault_core::error::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /uploads/{storedName} and GET /blob/{storedName}
pub async fn get_blob(
    State(state): State<AppState>,
    Path(stored_name): Path<String>,
) -> ApiResult<Response> {
    let download = state.retrieval_service.open(&stored_name).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.content_type)
        .header(header::CONTENT_LENGTH, download.size_bytes)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff")
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")).into())
}
