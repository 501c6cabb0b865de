//! HTTP-specific error types for the SpaceGDN client.
//!
//! - [`HttpResponseError`]: the API answered with a non-2xx status
//! - [`HttpError`]: unified transport error, also covering network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use spacegdn::clients::{HttpClient, HttpError, Transport};
//!
//! match client.get("http://gdn.example.com/v2/?json").await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use spacegdn::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), r#"GDN request failed with status 404: {"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("GDN request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network, connection or URL error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
