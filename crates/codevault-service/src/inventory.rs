//! Inventory service: backend health and registry/blob consistency checks.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use codevault_core::result::AppResult;
use codevault_core::traits::blob::BlobStore;
use codevault_database::FileRegistry;

/// Backend health and item counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub registry_backend: String,
    pub registry_healthy: bool,
    pub record_count: u64,
    pub blob_backend: String,
    pub blob_healthy: bool,
    pub blob_count: u64,
}

/// Items present on one side of the registry/blob pairing but not the other.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanReport {
    /// Blobs no record points at (left behind by a failed insert).
    pub blobs_without_records: Vec<String>,
    /// Records whose blob is missing.
    pub records_without_blobs: Vec<String>,
}

impl OrphanReport {
    pub fn is_clean(&self) -> bool {
        self.blobs_without_records.is_empty() && self.records_without_blobs.is_empty()
    }
}

/// Reports on the state of both stores. Never modifies either.
#[derive(Clone)]
pub struct InventoryService {
    registry: Arc<dyn FileRegistry>,
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService")
            .field("registry", &self.registry.backend_type())
            .field("blobs", &self.blobs.backend_type())
            .finish()
    }
}

impl InventoryService {
    pub fn new(registry: Arc<dyn FileRegistry>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { registry, blobs }
    }

    /// Health of both backends. Counts are zero when a backend is unhealthy.
    pub async fn status(&self) -> StoreStatus {
        let registry_healthy = self.registry.health_check().await.unwrap_or(false);
        let blob_healthy = self.blobs.health_check().await.unwrap_or(false);

        let record_count = if registry_healthy {
            self.registry.count().await.unwrap_or(0)
        } else {
            0
        };
        let blob_count = if blob_healthy {
            self.blobs.list().await.map(|b| b.len() as u64).unwrap_or(0)
        } else {
            0
        };

        StoreStatus {
            registry_backend: self.registry.backend_type().to_string(),
            registry_healthy,
            record_count,
            blob_backend: self.blobs.backend_type().to_string(),
            blob_healthy,
            blob_count,
        }
    }

    /// Compare stored names in the registry against blobs on disk.
    pub async fn orphans(&self) -> AppResult<OrphanReport> {
        let recorded: HashSet<String> = self.registry.stored_names().await?.into_iter().collect();
        let present: HashSet<String> = self
            .blobs
            .list()
            .await?
            .into_iter()
            .map(|b| b.name)
            .collect();

        let mut blobs_without_records: Vec<_> = present.difference(&recorded).cloned().collect();
        let mut records_without_blobs: Vec<_> = recorded.difference(&present).cloned().collect();
        blobs_without_records.sort();
        records_without_blobs.sort();

        info!(
            orphan_blobs = blobs_without_records.len(),
            dangling_records = records_without_blobs.len(),
            "Orphan scan finished"
        );

        Ok(OrphanReport {
            blobs_without_records,
            records_without_blobs,
        })
    }
}
