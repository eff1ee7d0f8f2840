//! Collection limiting
//!
//! Cuts a page out of a slice according to the request's query parameters.

use super::params::{get_pagination_params, optional_param};
use super::types::{effective_limit, Identified, DEFAULT_MAX_LIMIT};
use crate::error::{Error, Result};
use crate::types::QueryParams;

/// Return the `offset`/`limit` window of `items`, capped at [`DEFAULT_MAX_LIMIT`]
pub fn limited<'a, T, Q>(items: &'a [T], query: &Q) -> Result<&'a [T]>
where
    Q: QueryParams + ?Sized,
{
    limited_with_max(items, query, DEFAULT_MAX_LIMIT)
}

/// Return the `offset`/`limit` window of `items`, capped at `max_limit`
///
/// `offset` defaults to 0. A missing or zero `limit`, or one above
/// `max_limit`, becomes `max_limit`. The window is truncated at the end of
/// `items` and is empty once `offset` reaches the length.
pub fn limited_with_max<'a, T, Q>(items: &'a [T], query: &Q, max_limit: usize) -> Result<&'a [T]>
where
    Q: QueryParams + ?Sized,
{
    let offset = optional_param(query, "offset")?.unwrap_or(0);
    let limit = effective_limit(optional_param(query, "limit")?, max_limit);

    let start = usize::try_from(offset).map_or(items.len(), |o| o.min(items.len()));
    let end = start.saturating_add(limit).min(items.len());

    tracing::debug!(
        offset,
        limit,
        max_limit,
        total = items.len(),
        returned = end - start,
        "Limited collection"
    );

    Ok(&items[start..end])
}

/// Return the page of `items` that follows the element identified by `marker`
///
/// Without a marker the page starts at the first element. A marker that
/// matches no element is rejected. `limit` is clamped as in
/// [`limited_with_max`].
pub fn limited_by_marker<'a, T, Q>(items: &'a [T], query: &Q, max_limit: usize) -> Result<&'a [T]>
where
    T: Identified,
    Q: QueryParams + ?Sized,
{
    let params = get_pagination_params(query)?;
    let limit = params.effective_limit(max_limit);

    let start = match params.marker {
        Some(marker) => {
            let position = items
                .iter()
                .position(|item| item.id() == marker)
                .ok_or_else(|| {
                    Error::invalid_param("marker", marker.to_string(), "marker not found")
                })?;
            position + 1
        }
        None => 0,
    };
    let end = start.saturating_add(limit).min(items.len());

    tracing::debug!(
        marker = params.marker,
        limit,
        max_limit,
        returned = end - start,
        "Limited collection by marker"
    );

    Ok(&items[start..end])
}
