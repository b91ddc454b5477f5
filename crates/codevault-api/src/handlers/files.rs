//! Listing and delete handlers.
//!
//! Both live on `/api/files/{key}`: for `GET` the key is an access code,
//! for `DELETE` it is a file id.

use axum::Json;
use axum::extract::{Path, Query, State};

use codevault_core::types::AccessCode;

use crate::dto::request::DeleteFileQuery;
use crate::dto::response::{FileRecordView, MessageResponse};
use crate::extractors::parse_file_id;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/files/{accessCode}
pub async fn list_files(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<Vec<FileRecordView>>> {
    let code = AccessCode::parse(&key)?;
    let records = state.listing_service.list(&code).await?;
    Ok(Json(records.into_iter().map(FileRecordView::from).collect()))
}

/// DELETE /api/files/{id}?accessCode=...
pub async fn delete_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<DeleteFileQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_file_id(&key)?;
    let code = query.into_access_code()?;

    state.delete_service.delete(id, code.as_ref()).await?;
    Ok(Json(MessageResponse::new("File deleted successfully")))
}
