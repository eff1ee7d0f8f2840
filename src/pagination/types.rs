//! Pagination types and traits
//!
//! Defines the parameter types shared by the limiting helpers.

use serde::{Deserialize, Serialize};

/// Upper bound on page size when the caller does not configure one
pub const DEFAULT_MAX_LIMIT: usize = 1000;

/// Validated `marker`/`limit` query parameters
///
/// A key is `Some` only when the request supplied it; nothing is defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Id of the last element seen by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<u64>,
    /// Requested page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Create empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker
    pub fn with_marker(mut self, marker: u64) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check if neither key was supplied
    pub fn is_empty(&self) -> bool {
        self.marker.is_none() && self.limit.is_none()
    }

    /// Page size after clamping to `max_limit`
    ///
    /// An absent or zero limit, or one above `max_limit`, becomes `max_limit`.
    pub fn effective_limit(&self, max_limit: usize) -> usize {
        effective_limit(self.limit, max_limit)
    }
}

/// Clamp a requested limit to `max_limit`
pub(crate) fn effective_limit(limit: Option<u64>, max_limit: usize) -> usize {
    match limit {
        Some(0) | None => max_limit,
        Some(limit) => usize::try_from(limit).map_or(max_limit, |limit| limit.min(max_limit)),
    }
}

/// Elements that can be located by a pagination marker
pub trait Identified {
    /// Stable integer id of this element
    fn id(&self) -> u64;
}

impl Identified for u64 {
    fn id(&self) -> u64 {
        *self
    }
}
