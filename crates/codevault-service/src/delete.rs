//! Delete service: remove a file's blob and its registry record.

use std::sync::Arc;

use tracing::{info, warn};

use codevault_core::config::AccessConfig;
use codevault_core::error::AppError;
use codevault_core::traits::blob::BlobStore;
use codevault_core::types::{AccessCode, FileId};
use codevault_database::FileRegistry;
use codevault_entity::file::FileRecord;

/// Deletes files by record id.
#[derive(Clone)]
pub struct DeleteService {
    registry: Arc<dyn FileRegistry>,
    blobs: Arc<dyn BlobStore>,
    config: AccessConfig,
}

impl std::fmt::Debug for DeleteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteService")
            .field("require_code_for_delete", &self.config.require_code_for_delete)
            .finish()
    }
}

impl DeleteService {
    pub fn new(
        registry: Arc<dyn FileRegistry>,
        blobs: Arc<dyn BlobStore>,
        config: AccessConfig,
    ) -> Self {
        Self {
            registry,
            blobs,
            config,
        }
    }

    /// Delete the file with `id` and return the removed record.
    ///
    /// When a code is supplied it must match the record's code, otherwise
    /// the file is reported as not found. A blob that is already gone is
    /// logged and tolerated. The blob goes first, then the record. Of two
    /// concurrent deletes of the same id, exactly one succeeds.
    pub async fn delete(
        &self,
        id: FileId,
        code: Option<&AccessCode>,
    ) -> Result<FileRecord, AppError> {
        if self.config.require_code_for_delete && code.is_none() {
            return Err(AppError::validation("An access code is required to delete files"));
        }

        let record = self
            .registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if let Some(code) = code {
            if !record.is_visible_to(code) {
                return Err(AppError::not_found("File not found"));
            }
        }

        if !self.blobs.delete(&record.stored_name).await? {
            warn!(
                file_id = %id,
                stored_name = %record.stored_name,
                "Blob was already missing while deleting file"
            );
        }

        if !self.registry.delete(id).await? {
            return Err(AppError::not_found("File not found"));
        }

        info!(file_id = %id, stored_name = %record.stored_name, "Deleted file");
        Ok(record)
    }
}
