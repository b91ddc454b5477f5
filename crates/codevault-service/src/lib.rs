//! # codevault-service
//!
//! Business logic for CodeVault. Each service orchestrates the file
//! registry and the blob store to implement one use case.
//!
//! Services follow constructor injection: the registry and blob store are
//! passed in as `Arc<dyn ...>` handles, never looked up globally.

pub mod delete;
pub mod inventory;
pub mod listing;
pub mod retrieval;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use delete::DeleteService;
pub use inventory::{InventoryService, OrphanReport, StoreStatus};
pub use listing::ListingService;
pub use retrieval::{BlobDownload, RetrievalService};
pub use upload::{UploadPayload, UploadService};
