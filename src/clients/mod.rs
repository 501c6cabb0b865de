//! HTTP transport types for SpaceGDN communication.
//!
//! # Overview
//!
//! - [`Transport`]: the GET contract a [`QueryBridge`](crate::QueryBridge) fetches through
//! - [`HttpClient`]: the default `reqwest`-backed transport
//! - [`HttpResponse`]: a raw response whose body is parsed with [`HttpResponse::json`]
//! - [`HttpError`]: transport failures (non-2xx status or network error)
//!
//! # Example
//!
//! ```rust,ignore
//! use spacegdn::clients::{HttpClient, Transport};
//!
//! let client = HttpClient::new(None)?;
//! let response = client.get("http://gdn.example.com/v2/?json").await?;
//! let payload = response.json()?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is sent once and any failure is returned to the caller.

mod errors;
mod http_client;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
pub use transport::Transport;
