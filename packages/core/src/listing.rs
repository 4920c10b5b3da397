//! Directory listing entries and the partitioned view the UI consumes.

use serde::{Deserialize, Serialize};

/// Whether an entry names a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One row of a directory listing, as returned by the server.
///
/// Entries are produced only by the server and immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    pub fn directory(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}

/// A directory listing partitioned into sub-directories and files.
///
/// Server order is preserved within each partition. The view built from a
/// missing listing (`None`) is empty: downstream renderers replace whatever
/// they held before, so a failed fetch clears the screen instead of leaving
/// a stale listing up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    pub directories: Vec<Entry>,
    pub files: Vec<Entry>,
}

impl DirectoryView {
    /// The empty view.
    pub fn empty() -> Self {
        DirectoryView::default()
    }

    /// Partition a raw listing into directories and files.
    pub fn from_entries(entries: Option<Vec<Entry>>) -> Self {
        let mut view = DirectoryView::empty();
        for entry in entries.into_iter().flatten() {
            match entry.kind {
                EntryKind::Directory => view.directories.push(entry),
                EntryKind::File => view.files.push(entry),
            }
        }
        view
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// Total number of entries across both partitions.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}
