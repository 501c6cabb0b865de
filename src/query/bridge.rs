//! The fluent GDN query builder and its result cache.

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::{Endpoint, GdnConfig};
use crate::query::errors::QueryError;
use crate::query::params::{Param, Parameters, ValueList};

/// API version segment that every route starts with.
pub const API_VERSION_SEGMENT: &str = "v2";

/// Top-level key holding the result collection.
const RESULTS_FIELD: &str = "results";

/// Literal trailing token the GDN expects after the parameters.
const JSON_MARKER: &str = "json";

/// Wire value of a set boolean flag.
const TRUE_MARKER: &str = "1";

/// A query against the GDN, together with its lazily fetched result.
///
/// Configuration methods return `&mut Self` and never touch the network. The
/// first access operation ([`fetch_results`](Self::fetch_results),
/// [`to_collection`](Self::to_collection), [`count`](Self::count),
/// [`iter`](Self::iter), [`to_text`](Self::to_text),
/// [`attribute`](Self::attribute)) builds the URL, issues a single GET
/// through the transport and caches the parsed payload. Later accesses read
/// the cache until [`reset`](Self::reset) is called.
///
/// A failed fetch caches nothing, so the next access sends the request again.
///
/// # Example
///
/// ```rust,ignore
/// use spacegdn::{Endpoint, GdnConfig, QueryBridge};
///
/// let config = GdnConfig::builder()
///     .endpoint(Endpoint::new("gdn.example.com")?)
///     .build()?;
/// let mut bridge = QueryBridge::from_config(&config)?;
///
/// bridge
///     .belonging_to("minecraft")
///     .get("jars")
///     .order_by("name", "asc")
///     .page(2);
///
/// for jar in bridge.iter().await? {
///     println!("{jar}");
/// }
/// println!("{} jars on this page", bridge.count().await?);
/// ```
#[derive(Debug)]
pub struct QueryBridge<T = HttpClient> {
    transport: T,
    endpoint: Option<Endpoint>,
    route: Vec<String>,
    parameters: Parameters,
    results: Option<Value>,
}

// Verify the default QueryBridge is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryBridge>();
};

impl QueryBridge<HttpClient> {
    /// Creates a bridge backed by a new [`HttpClient`].
    ///
    /// The configured endpoint, user agent prefix and timeout are applied.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn from_config(config: &GdnConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(Some(config))?;
        let mut bridge = Self::new(transport);
        bridge.endpoint = config.endpoint().cloned();
        Ok(bridge)
    }
}

impl<T> QueryBridge<T> {
    /// Creates an empty query that fetches through `transport`.
    ///
    /// No endpoint is set, so URLs are relative until
    /// [`set_endpoint`](Self::set_endpoint) is called.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: None,
            route: vec![API_VERSION_SEGMENT.to_string()],
            parameters: Parameters::new(),
            results: None,
        }
    }

    /// Sets the GDN base URL.
    ///
    /// `http://` is prepended when `endpoint` contains no `//`, and trailing
    /// slashes are collapsed into exactly one. The value is not otherwise
    /// validated; use [`Endpoint::new`] for that.
    pub fn set_endpoint(&mut self, endpoint: &str) -> &mut Self {
        self.endpoint = Some(Endpoint::normalized(endpoint));
        self
    }

    /// Clears the parameters, the route (back to `v2`) and the cached result.
    ///
    /// The endpoint and transport are kept.
    pub fn reset(&mut self) -> &mut Self {
        tracing::debug!("Resetting GDN query");
        self.parameters.clear();
        self.route.truncate(1);
        self.results = None;
        self
    }

    /// Scopes the query to the children of the given parent ids.
    ///
    /// Accepts one id or an ordered sequence. Segments accumulate across
    /// calls: `belonging_to("a")` then `belonging_to(["b", "c"])` produces
    /// the route `v2/a/b/c`.
    pub fn belonging_to(&mut self, ids: impl Into<ValueList>) -> &mut Self {
        self.route.extend(ids.into().into_inner());
        self
    }

    /// Includes each result's parents in the response.
    pub fn with_parents(&mut self) -> &mut Self {
        self.parameters.set(Param::Parents, TRUE_MARKER);
        self
    }

    /// Sets the resource type to fetch.
    ///
    /// One trailing `s` is stripped, so plural names map to the GDN's
    /// singular resource names: `"jars"` becomes `"jar"`, `"bus"` becomes
    /// `"bu"`.
    pub fn get(&mut self, resource: &str) -> &mut Self {
        let resource = resource.strip_suffix('s').unwrap_or(resource);
        self.parameters.set(Param::Resource, resource);
        self
    }

    /// Sets the `where` filter to `column.operator.value`.
    ///
    /// A list of values is joined with `,`. Only one filter is kept; a second
    /// call replaces the first.
    pub fn filter(
        &mut self,
        column: &str,
        operator: &str,
        value: impl Into<ValueList>,
    ) -> &mut Self {
        let value = value.into().join(",");
        self.parameters.set(Param::Where, format!("{column}.{operator}.{value}"));
        self
    }

    /// Sets the page to fetch.
    pub fn page(&mut self, page: u32) -> &mut Self {
        self.parameters.set(Param::Page, page.to_string());
        self
    }

    /// Orders the results by `column`.
    ///
    /// `direction` is usually a [`SortDirection`](crate::query::SortDirection)
    /// or `"asc"` / `"desc"`; any other value is sent verbatim.
    pub fn order_by(&mut self, column: &str, direction: impl std::fmt::Display) -> &mut Self {
        self.parameters.set(Param::Sort, format!("{column}.{direction}"));
        self
    }

    /// Builds the request URL from the current endpoint, route and parameters.
    ///
    /// The format is `<endpoint>v2[/<segment>]*/?[<key>=<value>&]*json`.
    /// Without an endpoint the URL is relative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spacegdn::{HttpClient, QueryBridge};
    ///
    /// let mut bridge = QueryBridge::new(HttpClient::new(None).unwrap());
    /// bridge.set_endpoint("foo").with_parents().page(2);
    ///
    /// assert_eq!(bridge.build_url(), "http://foo/v2/?parents=1&page=2&json");
    /// ```
    #[must_use]
    pub fn build_url(&self) -> String {
        let endpoint = self.endpoint.as_ref().map_or("", AsRef::as_ref);
        let base = format!("{endpoint}{}", self.route.join("/"));

        let mut url = base.trim_end_matches('/').to_string();
        url.push_str("/?");
        url.push_str(&self.parameters.to_query_string());
        url.push_str(JSON_MARKER);
        url
    }

    /// Returns the endpoint, if set.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    /// Returns the route segments, starting with `v2`.
    #[must_use]
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the cached payload without fetching.
    #[must_use]
    pub const fn results(&self) -> Option<&Value> {
        self.results.as_ref()
    }

    /// Returns `true` once a payload has been fetched and cached.
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        self.results.is_some()
    }
}

impl<T: Transport> QueryBridge<T> {
    /// Returns the full response payload, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the request fails and
    /// [`QueryError::Json`] if the body is not valid JSON. Nothing is cached
    /// on failure.
    pub async fn fetch_results(&mut self) -> Result<&Value, QueryError> {
        let results = match self.results.take() {
            Some(results) => {
                tracing::trace!("Serving GDN results from cache");
                results
            }
            None => self.fetch().await?,
        };

        Ok(self.results.insert(results))
    }

    /// Returns the `results` array of the payload.
    ///
    /// # Errors
    ///
    /// Returns any error from [`fetch_results`](Self::fetch_results),
    /// [`QueryError::MissingField`] if the payload has no `results`, or
    /// [`QueryError::UnexpectedType`] if `results` is not an array.
    pub async fn to_collection(&mut self) -> Result<&[Value], QueryError> {
        let results = self.attribute(RESULTS_FIELD).await?;
        results
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| QueryError::UnexpectedType {
                field: RESULTS_FIELD.to_string(),
                expected: "an array",
            })
    }

    /// Returns the number of results.
    ///
    /// # Errors
    ///
    /// See [`to_collection`](Self::to_collection).
    pub async fn count(&mut self) -> Result<usize, QueryError> {
        Ok(self.to_collection().await?.len())
    }

    /// Iterates over the results.
    ///
    /// Each call starts over from the first cached result.
    ///
    /// # Errors
    ///
    /// See [`to_collection`](Self::to_collection).
    pub async fn iter(&mut self) -> Result<std::slice::Iter<'_, Value>, QueryError> {
        Ok(self.to_collection().await?.iter())
    }

    /// Serializes the results as compact JSON.
    ///
    /// # Errors
    ///
    /// See [`to_collection`](Self::to_collection).
    pub async fn to_text(&mut self) -> Result<String, QueryError> {
        let collection = self.to_collection().await?;
        Ok(serde_json::to_string(collection)?)
    }

    /// Looks up a top-level key of the payload, such as `results` or `pages`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`fetch_results`](Self::fetch_results), or
    /// [`QueryError::MissingField`] if the key is absent.
    pub async fn attribute(&mut self, name: &str) -> Result<&Value, QueryError> {
        let payload = self.fetch_results().await?;
        payload.get(name).ok_or_else(|| QueryError::MissingField {
            field: name.to_string(),
        })
    }

    async fn fetch(&self) -> Result<Value, QueryError> {
        let url = self.build_url();
        tracing::debug!("Fetching GDN results from {}", url);

        let response = self.transport.get(&url).await?;
        Ok(response.json()?)
    }
}
