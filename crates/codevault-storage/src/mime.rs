//! Content-type inference for stored blobs.

/// Fallback content type for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess a MIME type from a file name's extension.
pub fn mime_from_name(name: &str) -> Option<String> {
    mime_guess::from_path(name)
        .first()
        .map(|m| m.essence_str().to_string())
}

/// Guess a MIME type, falling back to `application/octet-stream`.
pub fn content_type_for(name: &str) -> String {
    mime_from_name(name).unwrap_or_else(|| OCTET_STREAM.to_string())
}
