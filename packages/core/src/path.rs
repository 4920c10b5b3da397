//! Server-relative paths with validated segments.

use std::fmt;

/// Errors related to path parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A path segment is not a usable file or directory name.
    #[error("invalid path segment '{segment}': {message}")]
    InvalidSegment { segment: String, message: String },
}

/// A server-relative path into the remote store.
///
/// A path is a normalized sequence of segment strings; the empty sequence
/// denotes the store root. Parsing drops empty segments, so `a//b`, `/a/b`
/// and `a/b/` all normalize to the same two-segment path.
///
/// Segments are file and directory names as the server knows them. They may
/// contain spaces, unicode and URL-reserved characters (those are
/// percent-encoded when a request is built, never altered here), but a
/// segment can never contain `/`, control characters, or be one of the
/// traversal names `.` and `..`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The root path (no segments).
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parse a path string, validating every segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shelf_core::Path;
    ///
    /// let path = Path::parse("projects/reports/2024").unwrap();
    /// assert_eq!(path.len(), 3);
    ///
    /// // Leading, trailing and doubled slashes are normalized away
    /// assert_eq!(Path::parse("/a//b/").unwrap(), Path::parse("a/b").unwrap());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let segments: Vec<String> = s
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect();

        for segment in &segments {
            Self::check_segment(segment)?;
        }

        Ok(Path { segments })
    }

    /// Validate a single file or directory name as a path segment.
    pub fn check_segment(segment: &str) -> Result<(), PathError> {
        if segment.is_empty() {
            return Err(PathError::InvalidSegment {
                segment: segment.to_string(),
                message: "empty name".to_string(),
            });
        }

        if segment == "." || segment == ".." {
            return Err(PathError::InvalidSegment {
                segment: segment.to_string(),
                message: "traversal names are not allowed".to_string(),
            });
        }

        if segment.contains('/') {
            return Err(PathError::InvalidSegment {
                segment: segment.to_string(),
                message: "names cannot contain '/'".to_string(),
            });
        }

        if let Some(c) = segment.chars().find(|c| c.is_control()) {
            return Err(PathError::InvalidSegment {
                segment: segment.to_string(),
                message: format!("control character {:?} in name", c),
            });
        }

        Ok(())
    }

    /// Check if this path is the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments. Alias of [`Path::is_root`] kept for
    /// iterator-style call sites.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// The segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Append one validated segment.
    pub fn child(&self, segment: &str) -> Result<Path, PathError> {
        Self::check_segment(segment)?;
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Ok(Path { segments })
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Path { segments }
    }

    /// The path with the last segment removed, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Path {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// The prefix containing the first `len` segments.
    pub fn prefix(&self, len: usize) -> Path {
        Path {
            segments: self.segments[..len].to_vec(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Macro for creating paths from trusted literals.
///
/// # Example
///
/// ```rust
/// use shelf_core::path;
///
/// let p = path!("projects/reports");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("").unwrap().len(), 0);
        assert_eq!(Path::parse("foo").unwrap().len(), 1);
        assert_eq!(Path::parse("foo/bar").unwrap().len(), 2);
        assert_eq!(Path::parse("foo/bar/baz").unwrap().len(), 3);
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(
            Path::parse("foo/bar/").unwrap(),
            Path::parse("foo/bar").unwrap()
        );
        assert_eq!(
            Path::parse("foo//bar").unwrap(),
            Path::parse("foo/bar").unwrap()
        );
        assert_eq!(
            Path::parse("/foo/bar").unwrap(),
            Path::parse("foo/bar").unwrap()
        );
    }

    #[test]
    fn names_with_spaces_and_unicode_allowed() {
        let p = Path::parse("my docs/compte rendu/名前").unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.name(), Some("名前"));
    }

    #[test]
    fn reserved_url_characters_allowed_in_names() {
        // Encoding is the request builder's concern, not the model's.
        let p = Path::parse("a&b/c%d").unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn traversal_names_rejected() {
        assert!(Path::parse("foo/..").is_err());
        assert!(Path::parse("./foo").is_err());
        assert!(Path::check_segment("..").is_err());
    }

    #[test]
    fn control_characters_rejected() {
        assert!(Path::parse("foo\u{0}bar").is_err());
        assert!(Path::check_segment("a\nb").is_err());
    }

    #[test]
    fn slash_in_segment_rejected() {
        assert!(Path::check_segment("a/b").is_err());
    }

    #[test]
    fn child_appends_validated_segment() {
        let p = path!("a/b");
        assert_eq!(p.child("c").unwrap(), path!("a/b/c"));
        assert!(p.child("..").is_err());
        // the receiver is untouched on failure
        assert_eq!(p, path!("a/b"));
    }

    #[test]
    fn parent_drops_last_segment() {
        assert_eq!(path!("a/b").parent(), Some(path!("a")));
        assert_eq!(path!("a").parent(), Some(Path::root()));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn prefix_takes_leading_segments() {
        let p = path!("a/b/c");
        assert_eq!(p.prefix(0), Path::root());
        assert_eq!(p.prefix(2), path!("a/b"));
        assert_eq!(p.prefix(3), p);
    }

    #[test]
    fn join_with_empty() {
        let p = path!("foo");
        assert_eq!(p.join(&Path::root()), p);
        assert_eq!(Path::root().join(&p), p);
    }

    #[test]
    fn display_joins_with_slash() {
        assert_eq!(path!("foo/bar/baz").to_string(), "foo/bar/baz");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn path_hash_and_ord() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(path!("foo"));
        set.insert(path!("bar"));
        set.insert(path!("foo"));
        assert_eq!(set.len(), 2);
        assert!(path!("a/b") < path!("a/c"));
    }

    #[test]
    fn error_display_names_the_segment() {
        let err = Path::check_segment("..").unwrap_err();
        assert!(err.to_string().contains(".."));
        assert!(err.to_string().contains("traversal"));
    }
}
