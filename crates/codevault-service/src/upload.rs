//! Upload service: store a batch of blobs and register one record per file.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use codevault_core::config::StorageConfig;
use codevault_core::error::{AppError, ErrorKind};
use codevault_core::traits::blob::BlobStore;
use codevault_core::types::AccessCode;
use codevault_database::FileRegistry;
use codevault_entity::file::{FileRecord, NewFileRecord};
use codevault_storage::generate_stored_name;
use codevault_storage::mime::mime_from_name;

/// Attempts at finding an unused stored name before giving up.
const MAX_NAME_ATTEMPTS: usize = 3;

/// One file in an upload request.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// Client-supplied file name.
    pub original_name: String,
    /// Content type declared by the client, if any.
    pub content_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Handles batch uploads under an access code.
#[derive(Clone)]
pub struct UploadService {
    registry: Arc<dyn FileRegistry>,
    blobs: Arc<dyn BlobStore>,
    config: StorageConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        registry: Arc<dyn FileRegistry>,
        blobs: Arc<dyn BlobStore>,
        config: StorageConfig,
    ) -> Self {
        Self {
            registry,
            blobs,
            config,
        }
    }

    /// Stores every payload and registers it under `code`.
    ///
    /// The whole batch is validated before anything is written. Writes are
    /// not transactional: if payload *k* fails, records for payloads
    /// before *k* stay registered and the error is returned.
    pub async fn upload(
        &self,
        code: &AccessCode,
        payloads: Vec<UploadPayload>,
    ) -> Result<Vec<FileRecord>, AppError> {
        self.validate(&payloads)?;

        let mut records = Vec::with_capacity(payloads.len());
        for payload in payloads {
            records.push(self.store_one(code, payload).await?);
        }

        info!(
            files = records.len(),
            code_len = code.as_str().len(),
            "Upload completed"
        );
        Ok(records)
    }

    fn validate(&self, payloads: &[UploadPayload]) -> Result<(), AppError> {
        if payloads.is_empty() {
            return Err(AppError::validation("At least one file is required"));
        }
        if payloads.len() > self.config.max_files_per_upload {
            return Err(AppError::validation(format!(
                "At most {} files may be uploaded at once",
                self.config.max_files_per_upload
            )));
        }
        if let Some(too_big) = payloads
            .iter()
            .find(|p| p.data.len() as u64 > self.config.max_upload_size_bytes)
        {
            return Err(AppError::payload_too_large(format!(
                "File '{}' exceeds maximum upload size of {} bytes",
                too_big.original_name, self.config.max_upload_size_bytes
            )));
        }
        Ok(())
    }

    async fn store_one(
        &self,
        code: &AccessCode,
        payload: UploadPayload,
    ) -> Result<FileRecord, AppError> {
        let original_name = if payload.original_name.trim().is_empty() {
            "file".to_string()
        } else {
            payload.original_name
        };
        let size_bytes = payload.data.len() as i64;
        let content_type = payload
            .content_type
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
            .or_else(|| mime_from_name(&original_name));

        let stored_name = self.write_blob(&original_name, payload.data).await?;

        let record = self
            .registry
            .insert(NewFileRecord {
                stored_name: stored_name.clone(),
                original_name,
                access_code: code.clone(),
                content_type,
                size_bytes,
            })
            .await
            .inspect_err(|e| {
                warn!(stored_name = %stored_name, error = %e, "Blob written but registry insert failed");
            })?;

        info!(
            file_id = %record.id,
            stored_name = %record.stored_name,
            size = record.size_bytes,
            "Stored file"
        );
        Ok(record)
    }

    /// Write `data` under a fresh stored name, drawing a new one if the
    /// store already holds a blob with that name.
    async fn write_blob(&self, original_name: &str, data: Bytes) -> Result<String, AppError> {
        let mut attempt = 1;
        loop {
            let stored_name = generate_stored_name(original_name);
            match self.blobs.write(&stored_name, data.clone()).await {
                Ok(()) => return Ok(stored_name),
                Err(e) if e.kind == ErrorKind::Conflict && attempt < MAX_NAME_ATTEMPTS => {
                    warn!(stored_name = %stored_name, attempt, "Stored name taken, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
