//! HTTP execution abstraction.
//!
//! The executor is the seam between the gateway's request orchestration and
//! the actual wire: production code goes through reqwest, tests substitute a
//! scripted implementation and never touch the network.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use url::Url;

use crate::error::GatewayError;
use crate::types::{ApiRequest, ApiResponse, FileAttachment};

/// Trait for executing HTTP requests against a base URL.
///
/// Returns `Err` with a message on transport-level failure; any response the
/// server actually produced (including error statuses) is `Ok`.
pub trait HttpExecutor: Send + Sync {
    fn execute(&self, base: &Url, request: &ApiRequest) -> Result<ApiResponse, String>;
}

/// Build the full request URL: base, percent-encoded path segments, query.
///
/// Segments go through [`Url::path_segments_mut`], so reserved characters in
/// file names (spaces, `&`, `%`, unicode) are percent-encoded on the wire
/// while staying verbatim in the path model.
pub fn request_url(base: &Url, request: &ApiRequest) -> Result<Url, GatewayError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| GatewayError::BaseNotExtensible { base: base.clone() })?;
        segments.pop_if_empty();
        segments.extend(request.path.iter());
    }
    if !request.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &request.query {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}

/// Production HTTP executor using reqwest's blocking client.
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Create a new executor with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client })
    }

    /// Create with default timeout of 30 seconds.
    pub fn with_default_timeout() -> Result<Self, String> {
        Self::new(Duration::from_secs(30))
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, base: &Url, request: &ApiRequest) -> Result<ApiResponse, String> {
        let url = request_url(base, request).map_err(|e| e.to_string())?;

        let mut req_builder = self.client.request(request.method.into(), url);

        if let Some(FileAttachment {
            field,
            filename,
            bytes,
        }) = &request.body
        {
            let part = Part::bytes(bytes.clone())
                .file_name(filename.clone())
                .mime_str("application/octet-stream")
                .map_err(|e| e.to_string())?;
            req_builder = req_builder.multipart(Form::new().part(field.clone(), part));
        }

        let response = req_builder.send().map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut headers = std::collections::HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body_text = response.text().map_err(|e| e.to_string())?;
        let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);

        Ok(ApiResponse {
            status,
            status_text,
            headers,
            body,
            body_text,
        })
    }
}
