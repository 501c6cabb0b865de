//! The transport seam between [`QueryBridge`](crate::QueryBridge) and HTTP.

use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;

/// Issues GET requests on behalf of a query.
///
/// [`HttpClient`](crate::clients::HttpClient) is the default implementation.
/// Implementations report non-2xx responses and network failures as
/// [`HttpError`]; the caller never inspects status codes itself.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::future::Future;
/// use spacegdn::{HttpError, HttpResponse, Transport};
///
/// struct Canned(&'static str);
///
/// impl Transport for Canned {
///     fn get(&self, _url: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
///         let body = self.0;
///         async move { Ok(HttpResponse::new(200, HashMap::new(), body)) }
///     }
/// }
/// ```
pub trait Transport {
    /// Sends a GET request to `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).get(url)
    }
}
