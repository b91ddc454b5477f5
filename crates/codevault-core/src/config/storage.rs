//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per stored blob.
    #[serde(default = "default_blob_root")]
    pub blob_root: String,
    /// Maximum size of a single uploaded file in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Maximum number of files accepted in one upload request.
    #[serde(default = "default_max_files")]
    pub max_files_per_upload: usize,
}

impl StorageConfig {
    /// Upper bound for a whole multipart request body.
    pub fn max_request_body_bytes(&self) -> usize {
        let total = self
            .max_upload_size_bytes
            .saturating_mul(self.max_files_per_upload as u64)
            // multipart framing and the access code field
            .saturating_add(64 * 1024);
        usize::try_from(total).unwrap_or(usize::MAX)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            blob_root: default_blob_root(),
            max_upload_size_bytes: default_max_upload(),
            max_files_per_upload: default_max_files(),
        }
    }
}

fn default_blob_root() -> String {
    "./uploads".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}

fn default_max_files() -> usize {
    50
}
