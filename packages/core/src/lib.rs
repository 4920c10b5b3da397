//! Core shelf types: paths, listings and breadcrumbs.
//!
//! This layer is pure data — no I/O:
//! - [`Path`]: validated server-relative path, the single source of truth
//!   for "where the user is"
//! - [`Entry`] / [`DirectoryView`]: a server listing and its partition into
//!   directories and files
//! - [`breadcrumb_trail`]: the ordered trail of ancestor crumbs for a path
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{breadcrumb_trail, path, DirectoryView, Entry};
//!
//! let view = DirectoryView::from_entries(Some(vec![Entry::directory("docs")]));
//! assert_eq!(view.directories.len(), 1);
//!
//! let trail = breadcrumb_trail(&path!("docs/2024"));
//! assert_eq!(trail.len(), 3);
//! ```

mod breadcrumb;
mod listing;
mod path;

pub use breadcrumb::{breadcrumb_trail, Breadcrumb, ROOT_LABEL};
pub use listing::{DirectoryView, Entry, EntryKind};
pub use path::{Path, PathError};
