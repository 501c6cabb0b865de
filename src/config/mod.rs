//! Configuration types for the SpaceGDN client.
//!
//! # Overview
//!
//! - [`GdnConfig`]: settings shared by every query issued through a client
//! - [`GdnConfigBuilder`]: a builder for constructing [`GdnConfig`] instances
//! - [`Endpoint`]: a normalized GDN base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use spacegdn::{Endpoint, GdnConfig};
//!
//! let config = GdnConfig::builder()
//!     .endpoint(Endpoint::new("gdn.example.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().unwrap().as_ref(), "http://gdn.example.com/");
//! ```

mod newtypes;

pub use newtypes::Endpoint;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the SpaceGDN client.
///
/// Every field is optional. Without an endpoint, queries build relative URLs
/// (`v2/...`), which is useful for inspecting URLs or for a transport that
/// resolves them itself.
#[derive(Clone, Debug, Default)]
pub struct GdnConfig {
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl GdnConfig {
    /// Creates a new builder for constructing a `GdnConfig`.
    #[must_use]
    pub fn builder() -> GdnConfigBuilder {
        GdnConfigBuilder::new()
    }

    /// Returns the endpoint, if configured.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify GdnConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GdnConfig>();
};

/// Builder for constructing [`GdnConfig`] instances.
///
/// # Defaults
///
/// - `endpoint`: `None` (relative URLs)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct GdnConfigBuilder {
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl GdnConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GDN endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the timeout applied to each request by the default client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`GdnConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<GdnConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(GdnConfig {
            endpoint: self.endpoint,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_empty_defaults() {
        let config = GdnConfig::builder().build().unwrap();

        assert!(config.endpoint().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = GdnConfig::builder()
            .endpoint(Endpoint::new("https://gdn.example.com").unwrap())
            .user_agent_prefix("MyLauncher/2.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(
            config.endpoint().map(AsRef::as_ref),
            Some("https://gdn.example.com/")
        );
        assert_eq!(config.user_agent_prefix(), Some("MyLauncher/2.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = GdnConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GdnConfig>();
    }
}
