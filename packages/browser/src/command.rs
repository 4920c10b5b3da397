//! Command dispatch.
//!
//! Every user gesture maps to one [`Command`] value consumed by a single
//! dispatcher, keeping UI event wiring decoupled from network orchestration.
//! The dispatcher is the only place that decides which session and gateway
//! operations a gesture triggers.

use tracing::debug;
use url::Url;

use shelf_core::Path;
use shelf_http::{FileGateway, HttpExecutor};

use crate::capability::Capability;
use crate::session::BrowserSession;
use crate::upload::UploadOutcome;

/// A discrete user gesture.
#[derive(Debug, Clone)]
pub enum Command {
    /// Jump to a path (or re-fetch the current one) and list it.
    Navigate(Option<Path>),
    /// Descend into a child directory of the current path.
    Enter(String),
    /// Go to the parent directory.
    Ascend,
    /// Create a directory under the current path.
    CreateDirectory(String),
    /// Select a file for upload into the current directory.
    ChooseFile { filename: String, bytes: Vec<u8> },
    /// Upload the chosen file.
    Upload,
    /// Point the client at a different server and re-list its root.
    SetServer(Url),
    /// Reserved surface, not implemented by this client.
    Download(Path),
    Delete(Path),
    Details(Path),
    Recent,
    Starred,
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The listing for the (possibly new) current path was fetched and
    /// committed.
    Listed,
    /// Navigation had nowhere to go; nothing was fetched.
    NoOp,
    DirectoryCreated,
    FileChosen,
    Uploaded,
    /// The upload request resolved with a failure; listing unchanged.
    UploadFailed(String),
    /// The command could not run (bad name, rejected creation, ...).
    Failed(String),
    /// The gateway was rebound and the new server's root listed.
    ServerChanged,
    /// The gesture maps to an endpoint this client does not implement.
    Unsupported(Capability),
}

/// Run one command against a session and its gateway.
pub fn dispatch<E: HttpExecutor>(
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
    command: Command,
) -> CommandOutcome {
    match command {
        Command::Navigate(path) => {
            session.navigate_via(gateway, path);
            CommandOutcome::Listed
        }
        Command::Enter(segment) => match session.enter_via(gateway, &segment) {
            Ok(()) => CommandOutcome::Listed,
            Err(error) => CommandOutcome::Failed(error.to_string()),
        },
        Command::Ascend => {
            if session.ascend_via(gateway) {
                CommandOutcome::Listed
            } else {
                CommandOutcome::NoOp
            }
        }
        Command::CreateDirectory(name) => {
            match gateway.create_directory(session.current_path(), &name) {
                Ok(()) => {
                    session.refresh_via(gateway);
                    CommandOutcome::DirectoryCreated
                }
                Err(error) => CommandOutcome::Failed(error.to_string()),
            }
        }
        Command::ChooseFile { filename, bytes } => match session.choose_file(&filename, bytes) {
            Ok(()) => CommandOutcome::FileChosen,
            Err(error) => CommandOutcome::Failed(error.to_string()),
        },
        Command::Upload => match session.upload_via(gateway) {
            UploadOutcome::Uploaded => CommandOutcome::Uploaded,
            UploadOutcome::Failed(message) => CommandOutcome::UploadFailed(message),
            UploadOutcome::NothingChosen => CommandOutcome::Failed("no file chosen".to_string()),
            UploadOutcome::AlreadyUploading => {
                CommandOutcome::Failed("an upload is already in flight".to_string())
            }
        },
        Command::SetServer(url) => {
            debug!(server = %url, "rebinding gateway");
            gateway.set_base_url(url);
            session.navigate_via(gateway, Some(Path::root()));
            CommandOutcome::ServerChanged
        }
        Command::Download(_) => CommandOutcome::Unsupported(Capability::Download),
        Command::Delete(_) => CommandOutcome::Unsupported(Capability::Delete),
        Command::Details(_) => CommandOutcome::Unsupported(Capability::Details),
        Command::Recent => CommandOutcome::Unsupported(Capability::Recent),
        Command::Starred => CommandOutcome::Unsupported(Capability::Starred),
    }
}
