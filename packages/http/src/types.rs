use std::collections::HashMap;

use shelf_core::Path;

/// HTTP method for API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::POST => http::Method::POST,
        }
    }
}

/// A file carried as a multipart form part: octet-stream content, the
/// filename sent as the part's attachment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A request against the store API: a method, a store path, and the intent
/// metadata (query pairs) the server routes on.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub method: Method,
    pub path: Path,
    /// Query pairs in the order they will appear in the URL.
    pub query: Vec<(String, String)>,
    pub body: Option<FileAttachment>,
}

impl ApiRequest {
    pub fn get(path: Path) -> Self {
        ApiRequest {
            method: Method::GET,
            path,
            ..Default::default()
        }
    }

    pub fn post(path: Path) -> Self {
        ApiRequest {
            method: Method::POST,
            path,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_attachment(
        mut self,
        field: impl Into<String>,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.body = Some(FileAttachment {
            field: field.into(),
            filename: filename.into(),
            bytes,
        });
        self
    }
}

/// Response to an API request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Response headers.
    pub headers: HashMap<String, String>,

    /// Response body parsed as JSON; null if empty or not valid JSON.
    pub body: serde_json::Value,

    /// Raw body text.
    pub body_text: String,
}

impl ApiResponse {
    /// Check if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response explicitly carries no content: the dedicated
    /// status, or a zero-length body.
    pub fn is_no_content(&self) -> bool {
        self.status == 204 || self.body_text.is_empty()
    }
}
