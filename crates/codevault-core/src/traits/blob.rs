//! Blob store trait for the bytes behind each file record.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::Stream;

use crate::result::AppResult;

/// Metadata about a stored blob.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BlobMeta {
    /// Stored name of the blob.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type inferred from the name, if known.
    pub content_type: Option<String>,
    /// Last modified timestamp.
    pub last_modified: Option<DateTime<Utc>>,
}

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Flat namespace of blobs addressed by stored name.
///
/// Names are single path components; implementations reject anything
/// that could escape the namespace (`..`, separators) with a not-found
/// error rather than touching the backing store.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g. `"local"`).
    fn backend_type(&self) -> &str;

    /// Check whether the store is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes under `name`, replacing any existing blob.
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Open a blob as a byte stream. Not-found if absent.
    async fn read(&self, name: &str) -> AppResult<ByteStream>;

    /// Read a blob fully into memory. Not-found if absent.
    async fn read_bytes(&self, name: &str) -> AppResult<Bytes>;

    /// Delete a blob. Returns `false` when there was nothing to delete.
    async fn delete(&self, name: &str) -> AppResult<bool>;

    /// Check whether a blob exists.
    async fn exists(&self, name: &str) -> AppResult<bool>;

    /// Get metadata about a blob. Not-found if absent.
    async fn metadata(&self, name: &str) -> AppResult<BlobMeta>;

    /// List every blob in the store, sorted by name.
    async fn list(&self) -> AppResult<Vec<BlobMeta>>;
}
