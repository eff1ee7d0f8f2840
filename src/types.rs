//! Common types used throughout rest-common
//!
//! This module contains the query parameter abstraction shared by the
//! pagination helpers, plus a small parsed query string type.

use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Query Parameter Lookup
// ============================================================================

/// Read-only access to a request's query parameters.
///
/// This is the only capability the pagination helpers need from a request.
/// A parameter that was not supplied returns `None`; a parameter supplied
/// with an empty value (`?offset=`) returns `Some("")`.
pub trait QueryParams {
    /// Look up a query parameter by name
    fn query_param(&self, name: &str) -> Option<&str>;
}

impl QueryParams for HashMap<String, String> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

// ============================================================================
// Query String
// ============================================================================

/// A parsed `application/x-www-form-urlencoded` query string.
///
/// Values are percent-decoded. When a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: StringMap,
}

impl QueryString {
    /// Create an empty query string
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let params = url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { params }
    }

    /// Parse the query portion of a full URL or path (`/items?offset=1`)
    pub fn from_uri(uri: &str) -> Self {
        match uri.split_once('?') {
            Some((_, query)) => {
                let query = query.split_once('#').map_or(query, |(q, _)| q);
                Self::parse(query)
            }
            None => Self::new(),
        }
    }

    /// Add or replace a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Number of distinct parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if no parameters were supplied
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl QueryParams for QueryString {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl From<StringMap> for QueryString {
    fn from(params: StringMap) -> Self {
        Self { params }
    }
}
