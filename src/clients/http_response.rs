//! HTTP response type returned by a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// An HTTP response from the GDN.
///
/// The body is kept as text; [`json`](Self::json) parses it on demand so that
/// a malformed payload surfaces as an error at the point it is read.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased, possibly with multiple values.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body is not valid JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spacegdn::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"results":[]}"#);
    /// assert_eq!(response.json().unwrap()["results"], serde_json::json!([]));
    /// ```
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_outside_2xx() {
        for code in [199, 301, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_json_parses_body() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"results":["foo","bar"]}"#);
        assert_eq!(response.json().unwrap(), json!({"results": ["foo", "bar"]}));
    }

    #[test]
    fn test_json_rejects_malformed_body() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>oops</html>");
        assert!(response.json().is_err());

        let empty = HttpResponse::new(200, HashMap::new(), "");
        assert!(empty.json().is_err());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, "{}");
        assert_eq!(response.request_id(), Some("abc-123"));

        let response = HttpResponse::new(200, HashMap::new(), "{}");
        assert!(response.request_id().is_none());
    }
}
