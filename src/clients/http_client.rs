//! HTTP client for SpaceGDN communication.
//!
//! This module provides [`HttpClient`], the default `reqwest`-backed
//! [`Transport`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::GdnConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for sending GET requests to the GDN.
///
/// The client handles:
/// - Default headers including User-Agent and `Accept: application/json`
/// - An optional per-request timeout from [`GdnConfig`]
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// It never retries: a failed request is reported to the caller as is.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use spacegdn::{HttpClient, Transport};
///
/// let client = HttpClient::new(None)?;
/// let response = client.get("http://gdn.example.com/v2/?json").await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration for `user_agent_prefix` and `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: Option<&GdnConfig>) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(GdnConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}SpaceGDN Rust Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(GdnConfig::timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    /// Sends a GET request to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The URL is invalid or relative, or a network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!("GDN request to {} failed with status {}", url, code);

        let error_reference = response.request_id().map(String::from);
        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.body,
            error_reference,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(None).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("SpaceGDN Rust Client v"));
        assert!(user_agent.ends_with(SDK_VERSION));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GdnConfig::builder()
            .user_agent_prefix("MyLauncher/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(Some(&config)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyLauncher/1.0 | "));
        assert!(user_agent.contains("SpaceGDN Rust Client"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(None).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let config = GdnConfig::builder()
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();

        assert!(HttpClient::new(Some(&config)).is_ok());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
