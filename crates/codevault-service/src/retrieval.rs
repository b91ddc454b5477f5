//! Retrieval service: stream a stored blob by its stored name.

use std::sync::Arc;

use codevault_core::result::AppResult;
use codevault_core::traits::blob::{BlobStore, ByteStream};
use codevault_storage::mime::content_type_for;

/// An opened blob ready to be streamed to a client.
pub struct BlobDownload {
    /// Byte stream over the blob content.
    pub stream: ByteStream,
    /// MIME type inferred from the stored name.
    pub content_type: String,
    /// Blob size in bytes.
    pub size_bytes: u64,
    /// The stored name that was opened.
    pub stored_name: String,
}

impl std::fmt::Debug for BlobDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobDownload")
            .field("stored_name", &self.stored_name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

/// Serves blob content by stored name, without an access-code check.
#[derive(Clone)]
pub struct RetrievalService {
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for RetrievalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalService").finish()
    }
}

impl RetrievalService {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Open the blob named `stored_name`. Missing or unsafe names are
    /// reported as not found.
    pub async fn open(&self, stored_name: &str) -> AppResult<BlobDownload> {
        let meta = self.blobs.metadata(stored_name).await?;
        let stream = self.blobs.read(stored_name).await?;

        Ok(BlobDownload {
            stream,
            content_type: content_type_for(stored_name),
            size_bytes: meta.size_bytes,
            stored_name: stored_name.to_string(),
        })
    }
}
