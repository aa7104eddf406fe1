//! Path key normalization.
//!
//! Keys are stored without a leading `/`, so `"/docs"` and `"docs"` name the
//! same mapping. A key must be a single non-empty path segment, because the
//! redirect route only matches `GET /{path}`.

/// Reasons a raw path cannot be used as a key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathKeyError {
    #[error("path must not be empty")]
    Empty,

    #[error("path must be a single segment without '/': {0}")]
    NestedSegment(String),
}

/// Normalizes a raw path into a storage key.
///
/// Surrounding whitespace and leading slashes are stripped; a single trailing
/// slash is tolerated.
///
/// # Errors
///
/// Returns [`PathKeyError::Empty`] if nothing remains after trimming.
/// Returns [`PathKeyError::NestedSegment`] if the key contains another `/`.
///
/// # Examples
///
/// ```
/// use urlshort::utils::path_key::normalize_path_key;
///
/// assert_eq!(normalize_path_key("/docs").unwrap(), "docs");
/// assert!(normalize_path_key("a/b").is_err());
/// ```
pub fn normalize_path_key(raw: &str) -> Result<String, PathKeyError> {
    let key = raw.trim().trim_start_matches('/');
    let key = key.strip_suffix('/').unwrap_or(key);

    if key.is_empty() {
        return Err(PathKeyError::Empty);
    }

    if key.contains('/') {
        return Err(PathKeyError::NestedSegment(key.to_string()));
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_is_unchanged() {
        assert_eq!(normalize_path_key("docs").unwrap(), "docs");
    }

    #[test]
    fn test_leading_slashes_are_stripped() {
        assert_eq!(normalize_path_key("/docs").unwrap(), "docs");
        assert_eq!(normalize_path_key("//docs").unwrap(), "docs");
        assert_eq!(normalize_path_key("  /docs  ").unwrap(), "docs");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(normalize_path_key("/docs/").unwrap(), "docs");
    }

    #[test]
    fn test_empty_keys_are_rejected() {
        assert_eq!(normalize_path_key(""), Err(PathKeyError::Empty));
        assert_eq!(normalize_path_key("/"), Err(PathKeyError::Empty));
        assert_eq!(normalize_path_key("   "), Err(PathKeyError::Empty));
    }

    #[test]
    fn test_nested_segments_are_rejected() {
        assert_eq!(
            normalize_path_key("/a/b"),
            Err(PathKeyError::NestedSegment("a/b".to_string()))
        );
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(normalize_path_key("/MyLink").unwrap(), "MyLink");
    }
}
