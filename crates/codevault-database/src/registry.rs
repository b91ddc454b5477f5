//! The file registry: persistent mapping from access code to file records.

use async_trait::async_trait;

use codevault_core::result::AppResult;
use codevault_core::types::{AccessCode, FileId};
use codevault_entity::file::{FileRecord, NewFileRecord};

/// Record store behind the upload, listing and delete services.
///
/// Services receive an `Arc<dyn FileRegistry>` at construction, so the
/// PostgreSQL registry and the in-memory one are interchangeable.
/// Implementations need no transactions: every method is a single
/// independent operation.
#[async_trait]
pub trait FileRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g. `"postgres"`).
    fn backend_type(&self) -> &str;

    /// Check whether the registry is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Insert a record and return it with its generated id and timestamp.
    ///
    /// Fails with a conflict error if `stored_name` is already registered.
    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord>;

    /// Find a record by id.
    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>>;

    /// All records uploaded under `code`, oldest first.
    async fn find_by_access_code(&self, code: &AccessCode) -> AppResult<Vec<FileRecord>>;

    /// Delete a record. Returns `true` if this call removed it.
    async fn delete(&self, id: FileId) -> AppResult<bool>;

    /// Count all records.
    async fn count(&self) -> AppResult<u64>;

    /// Every stored name currently registered.
    async fn stored_names(&self) -> AppResult<Vec<String>>;
}
