//! Convenience result type alias for CodeVault.

use crate::error::AppError;

/// A specialized `Result` type for CodeVault operations.
pub type AppResult<T> = Result<T, AppError>;
