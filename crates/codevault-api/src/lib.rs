//! # codevault-api
//!
//! HTTP API layer for CodeVault built on Axum.
//!
//! Provides the upload, listing, delete and blob retrieval endpoints, the
//! middleware stack (CORS, compression, request logging), DTOs, and the
//! mapping from [`codevault_core::AppError`] to HTTP responses through
//! [`error::ApiError`].

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, open_blob_store, open_registry, run_server};
pub use state::AppState;
