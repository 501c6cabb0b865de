//! The GDN query builder.
//!
//! # Overview
//!
//! - [`QueryBridge`]: composes a query, fetches it once and caches the result
//! - [`Param`] / [`Parameters`]: the recognized query-string keys, kept in order
//! - [`SortDirection`]: `asc` / `desc` for [`QueryBridge::order_by`]
//! - [`ValueList`]: one value or a list, for ids and filter values
//! - [`QueryError`]: errors from fetching or reading the result
//!
//! # URL Format
//!
//! ```text
//! <endpoint>/v2[/<segment>]*/?[<key>=<urlencoded-value>&]*json
//! ```
//!
//! Parameters appear in the order they were first set. The trailing `json`
//! is a bare token, not a `key=value` pair.

mod bridge;
mod errors;
mod params;

pub use bridge::{QueryBridge, API_VERSION_SEGMENT};
pub use errors::QueryError;
pub use params::{Param, Parameters, SortDirection, ValueList};
