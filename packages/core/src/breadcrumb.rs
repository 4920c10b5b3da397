//! Breadcrumb trails derived from the current path.

use crate::path::Path;

/// One navigable crumb: a display label and the path it navigates to.
///
/// Derived on demand from the current path, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub target: Path,
}

/// Label used for the root crumb.
pub const ROOT_LABEL: &str = "/";

/// Build the breadcrumb trail for a path.
///
/// The trail always starts with a root crumb targeting the empty path; the
/// i-th crumb after it targets the prefix of the first `i` segments. The
/// result depends only on the path, so two calls with equal paths yield
/// identical trails.
///
/// ```rust
/// use shelf_core::{breadcrumb_trail, path};
///
/// let trail = breadcrumb_trail(&path!("a/b"));
/// let targets: Vec<String> = trail.iter().map(|c| c.target.to_string()).collect();
/// assert_eq!(targets, ["", "a", "a/b"]);
/// ```
pub fn breadcrumb_trail(path: &Path) -> Vec<Breadcrumb> {
    let mut trail = Vec::with_capacity(path.len() + 1);
    trail.push(Breadcrumb {
        label: ROOT_LABEL.to_string(),
        target: Path::root(),
    });

    for (i, segment) in path.iter().enumerate() {
        trail.push(Breadcrumb {
            label: segment.to_string(),
            target: path.prefix(i + 1),
        });
    }

    trail
}
