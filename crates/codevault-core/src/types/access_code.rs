//! The access code: the shared string that scopes a group of files.
//!
//! Holding the exact code is the only credential the system knows about,
//! so it is validated once at the boundary and then compared byte for byte.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum accepted length of an access code, in characters.
pub const MAX_ACCESS_CODE_LEN: usize = 128;

/// A validated access code.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Validate a raw code supplied by a client.
    ///
    /// The code must be non-empty, at most [`MAX_ACCESS_CODE_LEN`]
    /// characters, and free of control characters and `/` (the code travels
    /// as a URL path segment). Surrounding whitespace is rejected rather
    /// than trimmed so `" X1 "` and `"X1"` never name the same group.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let code = raw;
        if code.trim().is_empty() {
            return Err(AppError::validation("Access code is required"));
        }
        if code.trim() != code {
            return Err(AppError::validation(
                "Access code must not start or end with whitespace",
            ));
        }
        if code.chars().count() > MAX_ACCESS_CODE_LEN {
            return Err(AppError::validation(format!(
                "Access code must be at most {MAX_ACCESS_CODE_LEN} characters"
            )));
        }
        if code.chars().any(|c| c.is_control() || c == '/') {
            return Err(AppError::validation(
                "Access code contains invalid characters",
            ));
        }
        Ok(Self(code.to_string()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the code, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessCode {
    // The code is a credential; keep it out of debug output and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessCode(<{} chars>)", self.0.chars().count())
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccessCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccessCode> for String {
    fn from(code: AccessCode) -> Self {
        code.0
    }
}
