//! In-memory file registry backed by `DashMap`.
//!
//! Records live only as long as the process. Used by the integration tests
//! and selectable with `registry.provider = "memory"`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use codevault_core::error::AppError;
use codevault_core::result::AppResult;
use codevault_core::types::{AccessCode, FileId};
use codevault_entity::file::{FileRecord, NewFileRecord};

use crate::registry::FileRegistry;

/// Process-local file registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileRegistry {
    /// Records keyed by id.
    records: Arc<DashMap<FileId, FileRecord>>,
    /// Stored name → id, enforcing stored-name uniqueness.
    stored_names: Arc<DashMap<String, FileId>>,
}

impl MemoryFileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRegistry for MemoryFileRegistry {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        let record = record.into_record();

        match self.stored_names.entry(record.stored_name.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "Stored name already registered: {}",
                    record.stored_name
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(record.id);
            }
        }

        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        Ok(self.records.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_access_code(&self, code: &AccessCode) -> AppResult<Vec<FileRecord>> {
        let mut records: Vec<FileRecord> = self
            .records
            .iter()
            .filter(|r| r.value().is_visible_to(code))
            .map(|r| r.value().clone())
            .collect();

        records.sort_by(|a, b| {
            a.uploaded_at
                .cmp(&b.uploaded_at)
                .then_with(|| a.stored_name.cmp(&b.stored_name))
        });
        Ok(records)
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        match self.records.remove(&id) {
            Some((_, record)) => {
                self.stored_names.remove(&record.stored_name);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.len() as u64)
    }

    async fn stored_names(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = self.stored_names.iter().map(|r| r.key().clone()).collect();
        names.sort();
        Ok(names)
    }
}
