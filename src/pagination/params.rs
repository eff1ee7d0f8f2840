//! Query parameter validation
//!
//! Pagination values must be plain runs of ASCII digits. A permissive integer
//! parser would also accept signs, so the digit check runs before conversion.

use super::types::PaginationParams;
use crate::error::{Error, Result};
use crate::types::QueryParams;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching non-negative decimal integers: digits only, non-empty
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parse a query parameter value as a non-negative integer
///
/// Blank values, whitespace and signs are rejected with
/// [`Error::InvalidParameter`] naming `param`. Digit runs too large for `u64`
/// saturate to `u64::MAX`, which every window clamps.
pub fn parse_non_negative(param: &str, value: &str) -> Result<u64> {
    if !DIGITS_REGEX.is_match(value) {
        let reason = if value.is_empty() {
            "must not be blank"
        } else if value.starts_with('-') {
            "must not be negative"
        } else {
            "must be a non-negative integer"
        };
        return Err(Error::invalid_param(param, value, reason));
    }

    Ok(value.parse::<u64>().unwrap_or(u64::MAX))
}

/// Read an optional non-negative integer parameter from the request
pub(crate) fn optional_param<Q>(query: &Q, param: &str) -> Result<Option<u64>>
where
    Q: QueryParams + ?Sized,
{
    query
        .query_param(param)
        .map(|value| parse_non_negative(param, value))
        .transpose()
}

/// Extract validated `marker` and `limit` parameters from a request
///
/// Keys the request does not carry stay `None`.
pub fn get_pagination_params<Q>(query: &Q) -> Result<PaginationParams>
where
    Q: QueryParams + ?Sized,
{
    Ok(PaginationParams {
        marker: optional_param(query, "marker")?,
        limit: optional_param(query, "limit")?,
    })
}
