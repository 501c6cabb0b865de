//! # SpaceGDN Rust Client
//!
//! A fluent query-builder client for the SpaceGDN JSON API.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`QueryBridge`], which composes a resource path, a filter, ordering,
//!   pagination and parent inclusion into a GDN URL
//! - Lazy, fetch-once result access: count, iteration, JSON text and
//!   top-level attribute lookup over the cached payload
//! - A [`Transport`] seam with a default `reqwest`-backed [`HttpClient`]
//! - Type-safe configuration via [`GdnConfig`] and [`GdnConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use spacegdn::{GdnConfig, Endpoint, QueryBridge};
//!
//! let config = GdnConfig::builder()
//!     .endpoint(Endpoint::new("gdn.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut bridge = QueryBridge::from_config(&config).unwrap();
//! bridge
//!     .belonging_to(["minecraft", "vanilla"])
//!     .get("builds")
//!     .filter("version", "$in", ["1.20", "1.21"])
//!     .order_by("date", "desc")
//!     .page(1);
//!
//! assert_eq!(
//!     bridge.build_url(),
//!     "http://gdn.example.com/v2/minecraft/vanilla/?r=build&where=version.%24in.1.20%2C1.21&sort=date.desc&page=1&json"
//! );
//! ```
//!
//! ## Reading Results
//!
//! ```rust,ignore
//! // The first access sends the request; the rest read the cache.
//! let total = bridge.count().await?;
//! for build in bridge.iter().await? {
//!     println!("{build}");
//! }
//! let pages = bridge.attribute("pages").await?;
//!
//! // Start a new query on the same client and endpoint.
//! bridge.reset().get("servers");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the transport is injected or built from a config
//! - **One request per query**: results are cached until [`QueryBridge::reset`]
//! - **No retries**: transport and parse failures reach the caller unchanged
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{Endpoint, GdnConfig, GdnConfigBuilder};
pub use error::ConfigError;

pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError, Transport};

pub use query::{Param, Parameters, QueryBridge, QueryError, SortDirection, ValueList};
