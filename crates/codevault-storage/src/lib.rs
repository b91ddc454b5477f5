//! # codevault-storage
//!
//! Blob storage for CodeVault: the local filesystem [`LocalBlobStore`],
//! collision-resistant stored-name generation, and content-type inference.

pub mod local;
pub mod mime;
pub mod naming;

pub use local::LocalBlobStore;
pub use naming::{generate_stored_name, is_valid_stored_name, sanitize_file_name};
