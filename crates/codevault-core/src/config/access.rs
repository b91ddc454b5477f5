//! Access-code enforcement configuration.

use serde::{Deserialize, Serialize};

/// Controls how strictly the access code is checked outside of listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Reject deletes that do not carry the record's access code.
    ///
    /// When `false`, a delete request may still carry a code, and a
    /// mismatching code is refused; only its absence is tolerated.
    #[serde(default)]
    pub require_code_for_delete: bool,
}
