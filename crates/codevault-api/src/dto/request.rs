//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

use codevault_core::error::AppError;
use codevault_core::types::AccessCode;

/// Query string accepted by `DELETE /api/files/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileQuery {
    /// Code the caller believes the file was uploaded under.
    #[validate(length(min = 1, max = 128, message = "Access code must be 1-128 characters"))]
    pub access_code: Option<String>,
}

impl DeleteFileQuery {
    /// Validate the query and parse the optional code.
    pub fn into_access_code(self) -> Result<Option<AccessCode>, AppError> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid query: {e}")))?;
        self.access_code
            .as_deref()
            .map(AccessCode::parse)
            .transpose()
    }
}
