use shelf_core::PathError;
use url::Url;

/// Failures at the gateway boundary.
///
/// Transport-level and server-level failures are normalized here; raw
/// `reqwest` errors never cross this boundary.
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    /// Network, DNS or connection-level failure.
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("server rejected request: HTTP {status} {status_text}")]
    Rejected { status: u16, status_text: String },

    /// The server answered 2xx but the body was not a directory listing.
    #[error("unexpected listing payload: {message}")]
    Decode { message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// cannot-be-a-base URLs (e.g. `data:`) take no path segments.
    #[error("base URL '{base}' cannot take path segments")]
    BaseNotExtensible { base: Url },

    #[error("invalid path: {0}")]
    Path(#[from] PathError),
}
