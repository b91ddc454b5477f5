//! Response DTOs.

use serde::{Deserialize, Serialize};

use codevault_entity::file::FileRecord;
use codevault_service::StoreStatus;

/// Path prefix blobs are served from.
pub const BLOB_URL_PREFIX: &str = "/uploads";

/// A file record as returned to clients, with a link to its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecordView {
    #[serde(flatten)]
    pub record: FileRecord,
    /// Relative URL the blob can be fetched from.
    pub url: String,
}

impl From<FileRecord> for FileRecordView {
    fn from(record: FileRecord) -> Self {
        let url = format!("{BLOB_URL_PREFIX}/{}", record.stored_name);
        Self { record, url }
    }
}

/// Response to a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub files: Vec<FileRecordView>,
}

impl UploadResponse {
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self {
            success: true,
            files: records.into_iter().map(FileRecordView::from).collect(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Readiness response with backend details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    /// `ok` when both backends are healthy, `degraded` otherwise.
    pub status: String,
    pub version: String,
    pub store: StoreStatus,
}
