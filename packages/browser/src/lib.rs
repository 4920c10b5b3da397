//! # shelf-browser
//!
//! The client-side navigation state machine for a remote file store.
//!
//! A [`BrowserSession`] owns the single current path and the listing view
//! derived from server responses. Navigation issues ticketed listing
//! fetches; only the response for the latest issued ticket commits, so two
//! rapid navigations can resolve in any order without the stale one winning.
//! An [`UploadCoordinator`] runs at most one upload at a time and re-lists
//! the target directory on success.
//!
//! Hosts drive the session either through the blocking `*_via` helpers or by
//! translating gestures into [`Command`] values for [`dispatch`]:
//!
//! ```ignore
//! use shelf_browser::{dispatch, BrowserSession, Command};
//! use shelf_http::FileGateway;
//!
//! let mut gateway = FileGateway::new("http://localhost:9000")?;
//! let mut session = BrowserSession::new();
//!
//! dispatch(&mut session, &mut gateway, Command::Enter("projects".into()));
//! for crumb in session.breadcrumbs() {
//!     println!("{} -> /{}", crumb.label, crumb.target);
//! }
//! ```

pub mod capability;
pub mod command;
pub mod session;
pub mod upload;

#[cfg(test)]
mod testing;

pub use capability::Capability;
pub use command::{dispatch, Command, CommandOutcome};
pub use session::{BrowserSession, ListingTicket};
pub use upload::{PendingUpload, UploadCoordinator, UploadOutcome, UploadState};
