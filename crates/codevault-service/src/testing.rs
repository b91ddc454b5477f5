//! Shared fixtures for service unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use codevault_core::config::{AccessConfig, StorageConfig};
use codevault_core::error::AppError;
use codevault_core::result::AppResult;
use codevault_core::traits::blob::{BlobMeta, BlobStore, ByteStream};
use codevault_core::types::AccessCode;
use codevault_database::{FileRegistry, MemoryFileRegistry};
use codevault_storage::LocalBlobStore;

use crate::upload::UploadPayload;

/// Registry, blob store and the temp dir keeping the blobs alive.
pub struct Fixture {
    pub registry: Arc<dyn FileRegistry>,
    pub blobs: Arc<dyn BlobStore>,
    pub storage: StorageConfig,
    pub access: AccessConfig,
    _dir: tempfile::TempDir,
}

impl Fixture {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let blobs = LocalBlobStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        Self {
            registry: Arc::new(MemoryFileRegistry::new()),
            blobs: Arc::new(blobs),
            storage: StorageConfig::default(),
            access: AccessConfig::default(),
            _dir: dir,
        }
    }

    /// Swap in a blob store that fails every write after `ok_writes`.
    pub fn with_failing_writes(mut self, ok_writes: usize) -> Self {
        self.blobs = Arc::new(FlakyBlobStore {
            inner: Arc::clone(&self.blobs),
            remaining: AtomicUsize::new(ok_writes),
            squats: AtomicUsize::new(0),
        });
        self
    }

    /// Swap in a blob store where another writer claims the next `count`
    /// names just before they are written.
    pub fn with_squatted_names(mut self, count: usize) -> Self {
        self.blobs = Arc::new(FlakyBlobStore {
            inner: Arc::clone(&self.blobs),
            remaining: AtomicUsize::new(usize::MAX),
            squats: AtomicUsize::new(count),
        });
        self
    }
}

/// Content planted by a squatting writer.
pub const SQUATTER: &str = "squatter";

pub fn code(s: &str) -> AccessCode {
    AccessCode::parse(s).unwrap()
}

pub fn payload(name: &str, body: &str) -> UploadPayload {
    UploadPayload {
        original_name: name.to_string(),
        content_type: None,
        data: Bytes::from(body.to_string()),
    }
}

/// Delegates to another store but fails writes once its budget runs out,
/// or races a squatting writer to the name first.
#[derive(Debug)]
struct FlakyBlobStore {
    inner: Arc<dyn BlobStore>,
    remaining: AtomicUsize,
    squats: AtomicUsize,
}

fn take_one(counter: &AtomicUsize) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[async_trait]
impl BlobStore for FlakyBlobStore {
    fn backend_type(&self) -> &str {
        "failing"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        if !take_one(&self.remaining) {
            return Err(AppError::storage("disk full"));
        }
        if take_one(&self.squats) {
            self.inner.write(name, Bytes::from(SQUATTER)).await?;
        }
        self.inner.write(name, data).await
    }

    async fn read(&self, name: &str) -> AppResult<ByteStream> {
        self.inner.read(name).await
    }

    async fn read_bytes(&self, name: &str) -> AppResult<Bytes> {
        self.inner.read_bytes(name).await
    }

    async fn delete(&self, name: &str) -> AppResult<bool> {
        self.inner.delete(name).await
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        self.inner.exists(name).await
    }

    async fn metadata(&self, name: &str) -> AppResult<BlobMeta> {
        self.inner.metadata(name).await
    }

    async fn list(&self) -> AppResult<Vec<BlobMeta>> {
        self.inner.list().await
    }
}
