//! Error types for SpaceGDN client configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that a bad
//! endpoint or timeout is reported when the configuration is built, not when
//! the first query is sent.
//!
//! # Example
//!
//! ```rust
//! use spacegdn::{ConfigError, Endpoint};
//!
//! let result = Endpoint::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyEndpoint)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`GdnConfig`](crate::GdnConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint was empty or only whitespace.
    #[error("GDN endpoint cannot be empty. Please provide a host such as 'gdn.example.com'.")]
    EmptyEndpoint,

    /// The endpoint contains characters that cannot appear in a URL.
    #[error("Invalid GDN endpoint '{endpoint}'. Endpoints must not contain whitespace.")]
    InvalidEndpoint {
        /// The endpoint that was provided.
        endpoint: String,
    },

    /// A zero request timeout was configured.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
