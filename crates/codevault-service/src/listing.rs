//! Listing service: every record registered under an access code.

use std::sync::Arc;

use tracing::debug;

use codevault_core::result::AppResult;
use codevault_core::types::AccessCode;
use codevault_database::FileRegistry;
use codevault_entity::file::FileRecord;

/// Read-only view over the registry, scoped by access code.
#[derive(Clone)]
pub struct ListingService {
    registry: Arc<dyn FileRegistry>,
}

impl std::fmt::Debug for ListingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingService").finish()
    }
}

impl ListingService {
    pub fn new(registry: Arc<dyn FileRegistry>) -> Self {
        Self { registry }
    }

    /// Records whose code equals `code` exactly, oldest first. An unknown
    /// code yields an empty list.
    pub async fn list(&self, code: &AccessCode) -> AppResult<Vec<FileRecord>> {
        let records = self.registry.find_by_access_code(code).await?;
        debug!(count = records.len(), "Listed files for access code");
        Ok(records)
    }
}
