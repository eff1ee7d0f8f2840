//! # rest-common
//!
//! Helpers shared by the collection endpoints of a REST API.
//!
//! ## Features
//!
//! - **Offset Pagination**: cut an `offset`/`limit` window out of a collection
//! - **Marker Pagination**: validate `marker`/`limit` and page after a marker
//! - **Href Helpers**: strip version segments, read trailing ids and UUIDs
//! - **HTTP Mode**: an axum server exposing the helpers, with 400 responses
//!   for invalid parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use rest_common::pagination::limited;
//! use rest_common::href::remove_version_from_href;
//! use rest_common::types::QueryString;
//!
//! let items: Vec<u32> = (0..2000).collect();
//! let query = QueryString::parse("offset=1&limit=3");
//! assert_eq!(limited(&items, &query).unwrap(), &[1, 2, 3]);
//!
//! let href = remove_version_from_href("http://www.testsite.com/v1.1/images").unwrap();
//! assert_eq!(href, "http://www.testsite.com/images");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and the query parameter abstraction
pub mod types;

/// Offset and marker pagination
pub mod pagination;

/// Href parsing helpers
pub mod href;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{QueryParams, QueryString};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
