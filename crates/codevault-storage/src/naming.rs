//! Stored-name generation and validation.
//!
//! A stored name is `<unix-millis>-<8 hex>-<sanitized original name>`.
//! The random segment separates uploads of the same name within one
//! millisecond. The suffix keeps the extension for content-type inference.

use chrono::Utc;
use uuid::Uuid;

/// Longest sanitized suffix kept in a stored name, in bytes.
const MAX_SUFFIX_LEN: usize = 120;

/// Generate a fresh stored name for an upload of `original_name`.
pub fn generate_stored_name(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{millis}-{}-{}",
        &random[..8],
        sanitize_file_name(original_name)
    )
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Only the final component of the name is kept (both `/` and `\` count as
/// separators), characters outside `[A-Za-z0-9._-]` become `_`, leading dots
/// are dropped, and an empty result becomes `file`. When truncating, the
/// extension is preserved.
pub fn sanitize_file_name(original_name: &str) -> String {
    let last = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        return "file".to_string();
    }
    if cleaned.len() <= MAX_SUFFIX_LEN {
        return cleaned.to_string();
    }

    // ASCII only past this point, so byte slicing is safe.
    match cleaned.rfind('.') {
        Some(dot) if cleaned.len() - dot <= 16 => {
            let ext = &cleaned[dot..];
            format!("{}{}", &cleaned[..MAX_SUFFIX_LEN - ext.len()], ext)
        }
        _ => cleaned[..MAX_SUFFIX_LEN].to_string(),
    }
}

/// Whether `name` is acceptable as a blob name: a single non-empty path
/// component made of the characters [`sanitize_file_name`] can produce.
pub fn is_valid_stored_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 255
        && name != "."
        && name != ".."
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
