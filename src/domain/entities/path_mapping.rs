//! Path mapping entity: a short path key and the URL it redirects to.

/// A stored redirect rule.
///
/// `path` is the lookup key and is stored without a leading `/`.
/// `url` is stored verbatim; the store performs no URL validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub path: String,
    pub url: String,
}

impl PathMapping {
    /// Creates a new PathMapping instance.
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

impl From<(String, String)> for PathMapping {
    fn from((path, url): (String, String)) -> Self {
        Self { path, url }
    }
}
