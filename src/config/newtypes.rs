//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized GDN endpoint.
///
/// Endpoints always carry a scheme and end with exactly one `/`. A value
/// without a `//` separator gets `http://` prepended; trailing slashes are
/// collapsed into one.
///
/// # Serialization
///
/// `Endpoint` serializes to and deserializes from its normalized string:
///
/// ```rust
/// use spacegdn::Endpoint;
///
/// let endpoint = Endpoint::new("gdn.example.com").unwrap();
/// let json = serde_json::to_string(&endpoint).unwrap();
/// assert_eq!(json, r#""http://gdn.example.com/""#);
/// ```
///
/// # Example
///
/// ```rust
/// use spacegdn::Endpoint;
///
/// let endpoint = Endpoint::new("https://gdn.example.com///").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://gdn.example.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    const DEFAULT_SCHEME: &'static str = "http://";

    /// Creates a new validated endpoint.
    ///
    /// Surrounding whitespace is trimmed before normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] if nothing is left after
    /// trimming, or [`ConfigError::InvalidEndpoint`] if the value contains
    /// inner whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: raw.to_string(),
            });
        }

        Ok(Self::normalized(raw))
    }

    /// Normalizes `raw` without validating it.
    ///
    /// This is the rule applied by
    /// [`QueryBridge::set_endpoint`](crate::QueryBridge::set_endpoint), which
    /// accepts any input.
    pub(crate) fn normalized(raw: &str) -> Self {
        let with_scheme = if raw.contains("//") {
            raw.to_string()
        } else {
            format!("{}{raw}", Self::DEFAULT_SCHEME)
        };

        let mut endpoint = with_scheme.trim_end_matches('/').to_string();
        endpoint.push('/');
        Self(endpoint)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_adds_default_scheme() {
        let endpoint = Endpoint::new("foo").unwrap();
        assert_eq!(endpoint.as_ref(), "http://foo/");
    }

    #[test]
    fn test_endpoint_keeps_existing_scheme() {
        assert_eq!(Endpoint::new("https://foo").unwrap().as_ref(), "https://foo/");
        assert_eq!(Endpoint::new("http://foo").unwrap().as_ref(), "http://foo/");
        // Protocol-relative URLs already contain the separator
        assert_eq!(Endpoint::new("//foo").unwrap().as_ref(), "//foo/");
    }

    #[test]
    fn test_endpoint_collapses_trailing_slashes() {
        assert_eq!(Endpoint::new("foo/").unwrap().as_ref(), "http://foo/");
        assert_eq!(
            Endpoint::new("https://foo/api///").unwrap().as_ref(),
            "https://foo/api/"
        );
    }

    #[test]
    fn test_endpoint_trims_surrounding_whitespace() {
        assert_eq!(Endpoint::new("  foo  ").unwrap().as_ref(), "http://foo/");
    }

    #[test]
    fn test_endpoint_rejects_empty_and_whitespace() {
        assert!(matches!(Endpoint::new(""), Err(ConfigError::EmptyEndpoint)));
        assert!(matches!(Endpoint::new(" \t"), Err(ConfigError::EmptyEndpoint)));
        assert!(matches!(
            Endpoint::new("foo bar"),
            Err(ConfigError::InvalidEndpoint { endpoint }) if endpoint == "foo bar"
        ));
    }

    #[test]
    fn test_normalized_accepts_anything() {
        // No validation: an empty value still gains a scheme and a slash
        assert_eq!(Endpoint::normalized("").as_ref(), "http:/");
        assert_eq!(Endpoint::normalized("a b").as_ref(), "http://a b/");
    }

    #[test]
    fn test_endpoint_deserializes_and_normalizes() {
        let endpoint: Endpoint = serde_json::from_str(r#""gdn.example.com/""#).unwrap();
        assert_eq!(endpoint.as_ref(), "http://gdn.example.com/");
    }

    #[test]
    fn test_endpoint_deserialize_rejects_empty() {
        let result: Result<Endpoint, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
