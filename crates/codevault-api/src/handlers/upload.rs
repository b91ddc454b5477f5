//! Upload handler.

use axum::Json;
use axum::extract::{Multipart, State};

use codevault_core::error::AppError;
use codevault_core::types::AccessCode;

use crate::dto::response::UploadResponse;
use crate::extractors::read_upload_form;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/upload
pub async fn upload_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let max_file_bytes = state.config.storage.max_upload_size_bytes;
    let form = read_upload_form(multipart, max_file_bytes).await?;

    let code = form
        .access_code
        .ok_or_else(|| AppError::validation("Access code is required"))?;
    let code = AccessCode::parse(&code)?;

    let records = state.upload_service.upload(&code, form.files).await?;
    Ok(Json(UploadResponse::new(records)))
}
