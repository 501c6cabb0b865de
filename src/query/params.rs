//! Query-string parameters understood by the GDN.
//!
//! The GDN recognizes a fixed set of keys ([`Param`]). [`Parameters`] keeps
//! them in the order they were first set and never holds a key twice, so the
//! serialized query string is stable and free of duplicates.
//!
//! # Example
//!
//! ```rust
//! use spacegdn::query::{Param, Parameters};
//!
//! let mut params = Parameters::new();
//! params.set(Param::Page, "2");
//! params.set(Param::Resource, "jar");
//! params.set(Param::Page, "3");
//!
//! assert_eq!(params.to_query_string(), "page=3&r=jar&");
//! ```

use std::fmt;

/// A query-string key recognized by the GDN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// The resource type to fetch (`r`).
    Resource,
    /// A single `column.operator.value` filter (`where`).
    Where,
    /// The page number (`page`).
    Page,
    /// A `column.direction` ordering (`sort`).
    Sort,
    /// Whether to include each result's parents (`parents`).
    Parents,
}

impl Param {
    /// Returns the key as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "r",
            Self::Where => "where",
            Self::Page => "page",
            Self::Sort => "sort",
            Self::Parents => "parents",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for [`QueryBridge::order_by`](crate::QueryBridge::order_by).
///
/// `order_by` also accepts any string; values other than `asc` and `desc` are
/// sent as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// One value or an ordered list of values.
///
/// Lets [`belonging_to`](crate::QueryBridge::belonging_to) and
/// [`filter`](crate::QueryBridge::filter) take either a single string or a
/// sequence of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueList(Vec<String>);

impl ValueList {
    /// Returns the values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Joins the values with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub(crate) fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for ValueList {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl<S: Into<String>> From<Vec<S>> for ValueList {
    fn from(values: Vec<S>) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ValueList {
    fn from(values: [S; N]) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String> + Clone> From<&[S]> for ValueList {
    fn from(values: &[S]) -> Self {
        Self(values.iter().cloned().map(Into::into).collect())
    }
}

/// Insertion-ordered, key-unique query parameters.
///
/// Setting a key that is already present replaces its value in place; the
/// key keeps the position from its first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(Param, String)>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `param` to `value`, overwriting any previous value.
    pub fn set(&mut self, param: Param, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == param) {
            entry.1 = value;
        } else {
            self.entries.push((param, value));
        }
    }

    /// Returns the value for `param`, if set.
    #[must_use]
    pub fn get(&self, param: Param) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == param)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the number of parameters set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every parameter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the parameters in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Serializes the parameters as `key=value&` pairs, form-encoding both
    /// sides. An empty set yields an empty string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter().fold(String::new(), |mut query, (key, value)| {
            query.push_str(&form_encode(key.as_str()));
            query.push('=');
            query.push_str(&form_encode(value));
            query.push('&');
            query
        })
    }
}

/// Encodes `value` for a form-style query string: a space becomes `+` and
/// everything but ASCII alphanumerics and `-_.` is percent-encoded.
fn form_encode(value: &str) -> String {
    // A literal `+` or `%` in the input is already escaped at this point
    urlencoding::encode(value)
        .replace("%20", "+")
        .replace('~', "%7E")
}
