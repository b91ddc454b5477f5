//! # codevault-core
//!
//! Core crate for CodeVault. Contains the blob store and file registry
//! traits, configuration schemas, typed identifiers, the access code value
//! type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CodeVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
