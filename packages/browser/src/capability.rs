//! Capabilities the server surface defines but this client does not drive.

use std::fmt;

/// Operations the API reserves endpoints for that this client does not
/// implement. Dispatching one yields an explicit unsupported result, never a
/// silent no-op, so hosts (and tests) can assert on the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Fetching a file's content.
    Download,
    /// Deleting a file or directory.
    Delete,
    /// Directory or file metadata.
    Details,
    /// Recently used entries.
    Recent,
    /// Starred entries.
    Starred,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Download => "download",
            Capability::Delete => "delete",
            Capability::Details => "details",
            Capability::Recent => "recent",
            Capability::Starred => "starred",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_lowercase() {
        assert_eq!(Capability::Download.to_string(), "download");
        assert_eq!(Capability::Recent.to_string(), "recent");
    }
}
