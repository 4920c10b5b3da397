//! The request gateway: navigation and upload intents become HTTP requests.

use tracing::{debug, warn};
use url::Url;

use shelf_core::{Entry, Path};

use crate::error::GatewayError;
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::types::{ApiRequest, ApiResponse};

/// Multipart field name the server expects for uploaded content.
const UPLOAD_FIELD: &str = "file";

/// Gateway to the remote file store API.
///
/// Holds the server base URL and an executor; every operation is one HTTP
/// request. The gateway never panics and never lets a raw transport error
/// escape: failures are either collapsed to "no data" ([`FileGateway::list`])
/// or normalized into [`GatewayError`].
pub struct FileGateway<E = ReqwestExecutor> {
    base: Url,
    executor: E,
}

impl FileGateway<ReqwestExecutor> {
    /// Create a gateway with the production executor.
    pub fn new(base: &str) -> Result<Self, GatewayError> {
        let base = Url::parse(base)?;
        let executor = ReqwestExecutor::with_default_timeout()
            .map_err(|message| GatewayError::Transport { message })?;
        Ok(FileGateway { base, executor })
    }
}

impl<E: HttpExecutor> FileGateway<E> {
    /// Create a gateway over a specific executor.
    pub fn with_executor(base: Url, executor: E) -> Self {
        FileGateway { base, executor }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Rebind the gateway to a different server.
    pub fn set_base_url(&mut self, base: Url) {
        self.base = base;
    }

    /// Fetch the listing of a directory.
    ///
    /// `None` means "render nothing": an empty directory, a rejection, a
    /// malformed payload and a transport failure all land here. Failures are
    /// logged and never surface as errors; the user re-triggers navigation
    /// to retry.
    pub fn list(&self, path: &Path) -> Option<Vec<Entry>> {
        match self.fetch_listing(path) {
            Ok(Some(entries)) => Some(entries),
            Ok(None) => {
                debug!(path = %path, "directory is empty");
                None
            }
            Err(error) => {
                warn!(path = %path, %error, "listing failed, rendering nothing");
                None
            }
        }
    }

    fn fetch_listing(&self, path: &Path) -> Result<Option<Vec<Entry>>, GatewayError> {
        let request = ApiRequest::get(path.clone())
            .with_query("type", "directory")
            .with_query("operation", "list");

        let response = self.execute(&request)?;
        if !response.is_success() {
            return Err(GatewayError::Rejected {
                status: response.status,
                status_text: response.status_text,
            });
        }
        if response.is_no_content() {
            return Ok(None);
        }

        let entries = serde_json::from_value(response.body)
            .map_err(|e| GatewayError::Decode {
                message: e.to_string(),
            })?;
        Ok(Some(entries))
    }

    /// Create a directory named `name` under `parent`.
    ///
    /// The name is taken verbatim from user input; no collision check is
    /// performed here, the server decides. The response body is ignored
    /// beyond its status.
    pub fn create_directory(&self, parent: &Path, name: &str) -> Result<(), GatewayError> {
        let target = parent.child(name)?;
        debug!(path = %target, "creating directory");

        let request = ApiRequest::post(target).with_query("type", "directory");
        let response = self.execute(&request)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Rejected {
                status: response.status,
                status_text: response.status_text,
            })
        }
    }

    /// Upload `bytes` as `filename` into the `dir` directory.
    ///
    /// The target location is encoded into the request path and the resource
    /// kind asserted with a query parameter; the content travels as one
    /// multipart attachment part.
    pub fn upload_file(
        &self,
        dir: &Path,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GatewayError> {
        let target = dir.child(filename)?;
        debug!(path = %target, size = bytes.len(), "uploading file");

        let request = ApiRequest::post(target)
            .with_query("type", "file")
            .with_attachment(UPLOAD_FIELD, filename, bytes);
        let response = self.execute(&request)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Rejected {
                status: response.status,
                status_text: response.status_text,
            })
        }
    }

    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, GatewayError> {
        self.executor
            .execute(&self.base, request)
            .map_err(|message| GatewayError::Transport { message })
    }
}
