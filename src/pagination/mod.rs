//! Pagination module
//!
//! Supports: Offset/limit windows, marker/limit windows
//!
//! # Overview
//!
//! Collection endpoints accept `offset`, `limit` and `marker` query
//! parameters. The helpers here validate those parameters and cut the
//! requested window out of an in-memory slice. Nothing is copied: every
//! window borrows from the input slice.

mod limiter;
mod params;
mod types;

pub use limiter::{limited, limited_by_marker, limited_with_max};
pub use params::{get_pagination_params, parse_non_negative};
pub use types::{Identified, PaginationParams, DEFAULT_MAX_LIMIT};

#[cfg(test)]
mod tests;
