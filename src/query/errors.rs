//! Error type for query execution and result access.
//!
//! - [`QueryError::Http`]: the transport failed (network error or non-2xx status)
//! - [`QueryError::Json`]: the response body was not valid JSON
//! - [`QueryError::MissingField`]: a required top-level key was absent
//! - [`QueryError::UnexpectedType`]: `results` was present but not an array
//!
//! # Example
//!
//! ```rust,ignore
//! use spacegdn::{QueryBridge, QueryError};
//!
//! match bridge.count().await {
//!     Ok(n) => println!("{n} results"),
//!     Err(QueryError::Http(e)) => println!("Request failed: {e}"),
//!     Err(QueryError::MissingField { field }) => println!("No '{field}' in response"),
//!     Err(other) => println!("Bad response: {other}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for [`QueryBridge`](crate::QueryBridge) access operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The GET request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be parsed or serialized as JSON.
    #[error("Malformed GDN response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response has no top-level `field`.
    #[error("GDN response has no '{field}' field")]
    MissingField {
        /// The key that was looked up.
        field: String,
    },

    /// A top-level field has the wrong JSON type.
    #[error("GDN response field '{field}' is not {expected}")]
    UnexpectedType {
        /// The key that was looked up.
        field: String,
        /// The JSON type that was expected.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_field_error_includes_field() {
        let error = QueryError::MissingField {
            field: "results".to_string(),
        };
        assert_eq!(error.to_string(), "GDN response has no 'results' field");
    }

    #[test]
    fn test_unexpected_type_error_message() {
        let error = QueryError::UnexpectedType {
            field: "results".to_string(),
            expected: "an array",
        };
        assert_eq!(
            error.to_string(),
            "GDN response field 'results' is not an array"
        );
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: "boom".to_string(),
            error_reference: None,
        });

        let error: QueryError = http_error.into();

        assert!(matches!(error, QueryError::Http(_)));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_from_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: QueryError = json_error.into();

        assert!(matches!(error, QueryError::Json(_)));
        assert!(error.to_string().starts_with("Malformed GDN response"));
    }
}
