//! # shelf-http
//!
//! The HTTP gateway between shelf's navigation model and the remote file
//! store API.
//!
//! The server exposes a REST-like surface routed on query parameters:
//!
//! ```text
//! GET  {base}/{path}?type=directory&operation=list   -> JSON [{name, type}, ..]
//! POST {base}/{path}/{name}?type=directory           -> create a directory
//! POST {base}/{path}/{name}?type=file  (multipart)   -> upload a file
//! ```
//!
//! [`FileGateway`] builds and issues those requests. Its result contract is
//! deliberately quiet: `list` collapses every failure to `None` so callers
//! render an empty directory instead of surfacing transport noise, while the
//! mutating operations report a normalized [`GatewayError`].
//!
//! ```ignore
//! use shelf_core::path;
//! use shelf_http::FileGateway;
//!
//! let gateway = FileGateway::new("http://localhost:9000")?;
//! let entries = gateway.list(&path!("projects"));     // None => render nothing
//! gateway.create_directory(&path!("projects"), "reports")?;
//! gateway.upload_file(&path!("projects"), "notes.txt", bytes)?;
//! ```

pub mod error;
pub mod executor;
pub mod gateway;
pub mod types;

pub use error::GatewayError;
pub use executor::{request_url, HttpExecutor, ReqwestExecutor};
pub use gateway::FileGateway;
pub use types::{ApiRequest, ApiResponse, FileAttachment, Method};
