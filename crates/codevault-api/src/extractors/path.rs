//! Typed path parameter helpers.

use codevault_core::error::AppError;
use codevault_core::types::FileId;

/// Parses a file id from a path segment.
pub fn parse_file_id(s: &str) -> Result<FileId, AppError> {
    FileId::parse(s).map_err(|_| AppError::validation(format!("Invalid file id: {s}")))
}
