//! Upload coordination.
//!
//! One coordinator manages one upload at a time:
//!
//! ```text
//! Idle -> FileChosen -> Uploading -> Idle
//! ```
//!
//! Choosing a file is synchronous and last-write-wins: picking a second file
//! before the previous one uploads simply replaces the pending reference,
//! nothing is queued. Only resolving the request (success or failure) leaves
//! the `Uploading` state.

use shelf_core::Path;

/// A file selected for upload and the directory it goes into.
///
/// Created on selection, destroyed when the upload request resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub target: Path,
}

/// Observable coordinator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    FileChosen,
    Uploading,
}

/// Why `begin` refused to start an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRefusal {
    /// No file has been chosen.
    NothingChosen,
    /// A previous upload has not resolved yet.
    AlreadyUploading,
}

/// Result of driving one upload to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The upload succeeded; the target directory was re-listed.
    Uploaded,
    /// The upload failed; navigation state and listing are unchanged.
    Failed(String),
    NothingChosen,
    AlreadyUploading,
}

#[derive(Debug, Default)]
pub struct UploadCoordinator {
    pending: Option<PendingUpload>,
    in_flight: bool,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        UploadCoordinator::default()
    }

    pub fn state(&self) -> UploadState {
        if self.in_flight {
            UploadState::Uploading
        } else if self.pending.is_some() {
            UploadState::FileChosen
        } else {
            UploadState::Idle
        }
    }

    /// Select a file. Replaces any previously chosen file; an upload already
    /// in flight keeps running with the file it took.
    pub fn choose(&mut self, upload: PendingUpload) {
        self.pending = Some(upload);
    }

    /// Take the chosen file and mark the coordinator in flight.
    pub fn begin(&mut self) -> Result<PendingUpload, UploadRefusal> {
        if self.in_flight {
            return Err(UploadRefusal::AlreadyUploading);
        }
        match self.pending.take() {
            Some(upload) => {
                self.in_flight = true;
                Ok(upload)
            }
            None => Err(UploadRefusal::NothingChosen),
        }
    }

    /// The upload request resolved; leave the `Uploading` state.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}
