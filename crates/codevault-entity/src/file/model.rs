//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use codevault_core::types::{AccessCode, FileId};

/// Metadata linking one stored blob to the access code it was uploaded under.
///
/// Every field is immutable after insertion; the registry only ever inserts
/// and deletes whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique record identifier.
    pub id: FileId,
    /// Name of the blob in the blob store.
    pub stored_name: String,
    /// Client-supplied display name.
    pub original_name: String,
    /// The access code grouping this record.
    pub access_code: String,
    /// MIME type declared by the client or inferred from the name.
    pub content_type: Option<String>,
    /// Number of bytes written to the blob store.
    pub size_bytes: i64,
    /// When the record was created.
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecord {
    /// Whether `code` grants access to this record.
    pub fn is_visible_to(&self, code: &AccessCode) -> bool {
        self.access_code == code.as_str()
    }
}

/// Data required to insert a new file record.
///
/// The registry assigns `id` and `uploaded_at`.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Name of the blob already written to the blob store.
    pub stored_name: String,
    /// Client-supplied display name.
    pub original_name: String,
    /// The access code grouping this record.
    pub access_code: AccessCode,
    /// MIME type.
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size_bytes: i64,
}

impl NewFileRecord {
    /// Materialize the record with a fresh id and the current time.
    ///
    /// Used by registries that do not generate ids themselves.
    pub fn into_record(self) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            stored_name: self.stored_name,
            original_name: self.original_name,
            access_code: self.access_code.into_inner(),
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            uploaded_at: Utc::now(),
        }
    }
}
