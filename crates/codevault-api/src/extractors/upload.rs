//! Multipart parsing for `POST /api/upload`.

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;

use codevault_core::error::AppError;
use codevault_service::UploadPayload;

/// Form field carrying the access code.
pub const ACCESS_CODE_FIELD: &str = "accessCode";

/// Form field name for file parts. `file` is accepted as a singular alias.
pub const FILES_FIELD: &str = "files";

/// The parsed upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    /// Raw access code, unvalidated.
    pub access_code: Option<String>,
    /// File parts in the order they were sent.
    pub files: Vec<UploadPayload>,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Upload exceeds the maximum request size")
    } else {
        AppError::validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

/// Read one file part chunk by chunk, failing as soon as it grows past
/// `max_file_bytes`.
async fn read_file_part(
    mut field: Field<'_>,
    name: &str,
    max_file_bytes: u64,
) -> Result<Bytes, AppError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if (buf.len() + chunk.len()) as u64 > max_file_bytes {
            return Err(AppError::payload_too_large(format!(
                "File '{name}' exceeds maximum upload size of {max_file_bytes} bytes"
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(buf))
}

/// Drain a multipart body into an [`UploadForm`]. Unknown fields are skipped.
///
/// File parts larger than `max_file_bytes` are rejected while streaming, so
/// an oversized part is never buffered whole.
pub async fn read_upload_form(
    mut multipart: Multipart,
    max_file_bytes: u64,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            ACCESS_CODE_FIELD => {
                form.access_code = Some(field.text().await.map_err(multipart_error)?);
            }
            FILES_FIELD | "file" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                let data = read_file_part(field, &original_name, max_file_bytes).await?;
                form.files.push(UploadPayload {
                    original_name,
                    content_type,
                    data,
                });
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}
