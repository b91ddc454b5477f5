//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use codevault_core::config::AppConfig;
use codevault_core::traits::blob::BlobStore;
use codevault_database::FileRegistry;
use codevault_service::{
    DeleteService, InventoryService, ListingService, RetrievalService, UploadService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: Instant,

    /// Upload service
    pub upload_service: Arc<UploadService>,
    /// Listing service
    pub listing_service: Arc<ListingService>,
    /// Delete service
    pub delete_service: Arc<DeleteService>,
    /// Blob retrieval service
    pub retrieval_service: Arc<RetrievalService>,
    /// Health and consistency reporting
    pub inventory_service: Arc<InventoryService>,
}

impl AppState {
    /// Wire every service around the given backends.
    pub fn new(
        config: AppConfig,
        registry: Arc<dyn FileRegistry>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        let upload_service = Arc::new(UploadService::new(
            Arc::clone(&registry),
            Arc::clone(&blobs),
            config.storage.clone(),
        ));
        let listing_service = Arc::new(ListingService::new(Arc::clone(&registry)));
        let delete_service = Arc::new(DeleteService::new(
            Arc::clone(&registry),
            Arc::clone(&blobs),
            config.access.clone(),
        ));
        let retrieval_service = Arc::new(RetrievalService::new(Arc::clone(&blobs)));
        let inventory_service = Arc::new(InventoryService::new(registry, blobs));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            upload_service,
            listing_service,
            delete_service,
            retrieval_service,
            inventory_service,
        }
    }
}
