//! The browsing session: one current path, one committed listing view.
//!
//! The session is a plain state machine with no I/O of its own. Navigation
//! splits into two halves so an event-driven host can interleave responses
//! freely:
//!
//! 1. `navigate`/`enter`/`ascend` update the current path and issue a
//!    [`ListingTicket`] carrying a monotonically increasing token;
//! 2. `commit_listing` applies a fetched listing, but only for the latest
//!    issued ticket — a response that raced with a newer navigation is
//!    discarded, so the view always reflects the last navigation the user
//!    *issued*, not the last response that happened to arrive.
//!
//! The `*_via` drivers run both halves back to back against a gateway for
//! hosts that are happy to block.

use tracing::{debug, warn};

use shelf_core::{breadcrumb_trail, Breadcrumb, DirectoryView, Entry, Path, PathError};
use shelf_http::{FileGateway, HttpExecutor};

use crate::upload::{PendingUpload, UploadCoordinator, UploadOutcome, UploadRefusal, UploadState};

/// Permission to commit one listing response.
///
/// Issued by a navigation operation; consumed by [`BrowserSession::commit_listing`].
/// Consuming by value means a ticket cannot be committed twice.
#[derive(Debug)]
pub struct ListingTicket {
    token: u64,
    path: Path,
}

impl ListingTicket {
    /// The path whose listing this ticket commits.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// One independent browsing session against a file store.
///
/// Owns the current path exclusively; every other component receives it as
/// an input and routes mutations back through the navigation operations.
#[derive(Debug, Default)]
pub struct BrowserSession {
    current: Path,
    view: DirectoryView,
    last_issued: u64,
    uploads: UploadCoordinator,
}

impl BrowserSession {
    /// A fresh session at the store root with an empty view.
    pub fn new() -> Self {
        BrowserSession::default()
    }

    pub fn current_path(&self) -> &Path {
        &self.current
    }

    /// The last committed listing, partitioned into directories and files.
    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    /// Breadcrumb trail for the current path, root crumb first.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumb_trail(&self.current)
    }

    pub fn upload_state(&self) -> UploadState {
        self.uploads.state()
    }

    /// Move to `path` (or stay put when `None`) and issue a listing fetch
    /// for the current path.
    pub fn navigate(&mut self, path: Option<Path>) -> ListingTicket {
        if let Some(path) = path {
            self.current = path;
        }
        self.issue()
    }

    /// Descend into a child directory of the current path.
    pub fn enter(&mut self, segment: &str) -> Result<ListingTicket, PathError> {
        let next = self.current.child(segment)?;
        Ok(self.navigate(Some(next)))
    }

    /// Move to the parent directory.
    ///
    /// Only a path with at least two segments has a separator to truncate
    /// at: from a top-level directory (and from the root itself) this is a
    /// no-op and no fetch is issued — the root is reached through the
    /// breadcrumb trail instead.
    pub fn ascend(&mut self) -> Option<ListingTicket> {
        if self.current.len() < 2 {
            return None;
        }
        let parent = self.current.parent()?;
        Some(self.navigate(Some(parent)))
    }

    fn issue(&mut self) -> ListingTicket {
        self.last_issued += 1;
        ListingTicket {
            token: self.last_issued,
            path: self.current.clone(),
        }
    }

    /// Apply a fetched listing.
    ///
    /// Returns `true` when the ticket was the latest issued and the view was
    /// replaced (a missing listing clears it). A stale ticket is discarded
    /// and leaves the view untouched.
    pub fn commit_listing(&mut self, ticket: ListingTicket, entries: Option<Vec<Entry>>) -> bool {
        if ticket.token != self.last_issued {
            debug!(
                token = ticket.token,
                latest = self.last_issued,
                path = %ticket.path,
                "discarding stale listing response"
            );
            return false;
        }
        self.view = DirectoryView::from_entries(entries);
        true
    }

    /// Navigate and synchronously fetch + commit the listing.
    pub fn navigate_via<E: HttpExecutor>(&mut self, gateway: &FileGateway<E>, path: Option<Path>) {
        let ticket = self.navigate(path);
        let entries = gateway.list(ticket.path());
        self.commit_listing(ticket, entries);
    }

    /// Re-fetch the current path's listing.
    pub fn refresh_via<E: HttpExecutor>(&mut self, gateway: &FileGateway<E>) {
        self.navigate_via(gateway, None);
    }

    /// Enter a child directory and fetch its listing.
    pub fn enter_via<E: HttpExecutor>(
        &mut self,
        gateway: &FileGateway<E>,
        segment: &str,
    ) -> Result<(), PathError> {
        let ticket = self.enter(segment)?;
        let entries = gateway.list(ticket.path());
        self.commit_listing(ticket, entries);
        Ok(())
    }

    /// Ascend and fetch the parent listing. Returns whether the session moved.
    pub fn ascend_via<E: HttpExecutor>(&mut self, gateway: &FileGateway<E>) -> bool {
        match self.ascend() {
            Some(ticket) => {
                let entries = gateway.list(ticket.path());
                self.commit_listing(ticket, entries);
                true
            }
            None => false,
        }
    }

    /// Select a file for upload into the current directory.
    ///
    /// Validates the name up front so a broken selection fails here, not
    /// mid-upload. Selection is last-write-wins.
    pub fn choose_file(&mut self, filename: &str, bytes: Vec<u8>) -> Result<(), PathError> {
        Path::check_segment(filename)?;
        self.uploads.choose(PendingUpload {
            filename: filename.to_string(),
            bytes,
            target: self.current.clone(),
        });
        Ok(())
    }

    /// Upload the chosen file and, on success, re-list its target directory.
    ///
    /// A failed upload is reported and leaves both the current path and the
    /// committed view exactly as they were.
    pub fn upload_via<E: HttpExecutor>(&mut self, gateway: &FileGateway<E>) -> UploadOutcome {
        let pending = match self.uploads.begin() {
            Ok(pending) => pending,
            Err(UploadRefusal::NothingChosen) => return UploadOutcome::NothingChosen,
            Err(UploadRefusal::AlreadyUploading) => return UploadOutcome::AlreadyUploading,
        };

        let PendingUpload {
            filename,
            bytes,
            target,
        } = pending;

        match gateway.upload_file(&target, &filename, bytes) {
            Ok(()) => {
                self.uploads.finish();
                self.navigate_via(gateway, Some(target));
                UploadOutcome::Uploaded
            }
            Err(error) => {
                self.uploads.finish();
                warn!(%error, filename = %filename, "upload failed");
                UploadOutcome::Failed(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedExecutor;
    use shelf_core::path;

    fn entries(json: &str) -> Option<Vec<Entry>> {
        Some(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn starts_at_root_with_empty_view() {
        let session = BrowserSession::new();
        assert!(session.current_path().is_root());
        assert!(session.view().is_empty());
        assert_eq!(session.upload_state(), UploadState::Idle);
    }

    #[test]
    fn navigate_replaces_path_and_issues_ticket_for_it() {
        let mut session = BrowserSession::new();
        let ticket = session.navigate(Some(path!("a/b")));
        assert_eq!(ticket.path(), &path!("a/b"));
        assert_eq!(session.current_path(), &path!("a/b"));
    }

    #[test]
    fn navigate_none_refetches_current_path() {
        let mut session = BrowserSession::new();
        session.navigate(Some(path!("a")));
        let ticket = session.navigate(None);
        assert_eq!(ticket.path(), &path!("a"));
    }

    #[test]
    fn enter_appends_segment() {
        let mut session = BrowserSession::new();
        session.navigate(Some(path!("a")));
        let ticket = session.enter("b").unwrap();
        assert_eq!(ticket.path(), &path!("a/b"));
        assert!(session.enter("..").is_err());
    }

    #[test]
    fn ascend_truncates_at_last_separator() {
        let mut session = BrowserSession::new();
        session.navigate(Some(path!("a/b")));
        let ticket = session.ascend().unwrap();
        assert_eq!(ticket.path(), &path!("a"));
        assert_eq!(session.current_path(), &path!("a"));
    }

    #[test]
    fn ascend_from_top_level_directory_is_a_no_op() {
        let mut session = BrowserSession::new();
        session.navigate(Some(path!("a")));
        assert!(session.ascend().is_none());
        assert_eq!(session.current_path(), &path!("a"));
    }

    #[test]
    fn ascend_from_root_is_a_no_op() {
        let mut session = BrowserSession::new();
        assert!(session.ascend().is_none());
        assert!(session.current_path().is_root());
    }

    #[test]
    fn commit_applies_latest_ticket() {
        let mut session = BrowserSession::new();
        let ticket = session.navigate(Some(path!("a")));
        assert!(session.commit_listing(
            ticket,
            entries(r#"[{"name":"x","type":"directory"},{"name":"y.txt","type":"file"}]"#),
        ));
        assert_eq!(session.view().directories[0].name, "x");
        assert_eq!(session.view().files[0].name, "y.txt");
    }

    #[test]
    fn commit_of_missing_listing_clears_the_view() {
        let mut session = BrowserSession::new();
        let ticket = session.navigate(Some(path!("a")));
        session.commit_listing(ticket, entries(r#"[{"name":"x","type":"directory"}]"#));
        assert!(!session.view().is_empty());

        let ticket = session.navigate(None);
        assert!(session.commit_listing(ticket, None));
        assert!(session.view().is_empty());
    }

    #[test]
    fn stale_response_does_not_win_the_race() {
        let mut session = BrowserSession::new();

        // Two quick navigations; "a"'s response arrives after "b"'s.
        let ticket_a = session.navigate(Some(path!("a")));
        let ticket_b = session.navigate(Some(path!("b")));

        assert!(session.commit_listing(
            ticket_b,
            entries(r#"[{"name":"from-b","type":"directory"}]"#),
        ));
        assert!(!session.commit_listing(
            ticket_a,
            entries(r#"[{"name":"from-a","type":"directory"}]"#),
        ));

        assert_eq!(session.current_path(), &path!("b"));
        assert_eq!(session.view().directories[0].name, "from-b");
    }

    #[test]
    fn navigate_via_commits_the_fetched_listing() {
        let executor = ScriptedExecutor::new()
            .with_listing("a", r#"[{"name":"inner","type":"directory"}]"#);
        let gateway = crate::testing::gateway(executor);

        let mut session = BrowserSession::new();
        session.navigate_via(&gateway, Some(path!("a")));

        assert_eq!(session.view().directories[0].name, "inner");
    }

    #[test]
    fn navigate_via_failed_fetch_renders_nothing() {
        let executor = ScriptedExecutor::new().with_failure("gone", "connection reset");
        let gateway = crate::testing::gateway(executor);

        let mut session = BrowserSession::new();
        session.navigate_via(&gateway, Some(path!("gone")));

        assert!(session.view().is_empty());
        assert_eq!(session.current_path(), &path!("gone"));
    }

    #[test]
    fn upload_success_relists_target_exactly_once() {
        let executor = ScriptedExecutor::new();
        let gateway = crate::testing::gateway(executor.clone());

        let mut session = BrowserSession::new();
        session.navigate_via(&gateway, Some(path!("docs")));
        session.choose_file("f.txt", b"bytes".to_vec()).unwrap();

        let before = executor.list_count("docs");
        let outcome = session.upload_via(&gateway);
        assert_eq!(outcome, UploadOutcome::Uploaded);
        assert_eq!(executor.list_count("docs"), before + 1);
        assert_eq!(session.upload_state(), UploadState::Idle);
    }

    #[test]
    fn upload_failure_reports_and_leaves_listing_unchanged() {
        let executor = ScriptedExecutor::new()
            .with_listing("docs", r#"[{"name":"kept.txt","type":"file"}]"#)
            .with_failure("docs/f.txt", "connection reset");
        let gateway = crate::testing::gateway(executor.clone());

        let mut session = BrowserSession::new();
        session.navigate_via(&gateway, Some(path!("docs")));
        session.choose_file("f.txt", b"bytes".to_vec()).unwrap();

        let before = executor.list_count("docs");
        let outcome = session.upload_via(&gateway);
        assert!(matches!(outcome, UploadOutcome::Failed(_)));

        // no re-list, listing and path untouched
        assert_eq!(executor.list_count("docs"), before);
        assert_eq!(session.view().files[0].name, "kept.txt");
        assert_eq!(session.current_path(), &path!("docs"));
        assert_eq!(session.upload_state(), UploadState::Idle);
    }

    #[test]
    fn upload_without_choice_is_refused() {
        let gateway = crate::testing::gateway(ScriptedExecutor::new());
        let mut session = BrowserSession::new();
        assert_eq!(session.upload_via(&gateway), UploadOutcome::NothingChosen);
    }

    #[test]
    fn breadcrumbs_follow_the_current_path() {
        let mut session = BrowserSession::new();
        session.navigate(Some(path!("a/b")));
        let crumbs = session.breadcrumbs();
        let targets: Vec<String> = crumbs.iter().map(|c| c.target.to_string()).collect();
        assert_eq!(targets, ["", "a", "a/b"]);
    }
}
