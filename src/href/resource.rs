//! Trailing resource identifiers

use super::parts::HrefParts;
use crate::error::{Error, Result};
use crate::pagination::parse_non_negative;

/// Read the trailing integer id of an href
///
/// `http://host/servers/45` yields `45`. Fails with [`Error::MalformedUrl`]
/// when the last path segment is empty, not made of digits, or too large
/// for `u64`.
pub fn get_id_from_href(href: &str) -> Result<u64> {
    let segment = HrefParts::split(href).last_segment();
    if segment.is_empty() {
        return Err(Error::malformed_url(href, "href has no trailing path segment"));
    }

    if parse_non_negative("id", segment).is_err() {
        return Err(Error::malformed_url(
            href,
            format!("'{segment}' is not an integer id"),
        ));
    }

    // Ids are exact, so unlike page parameters they do not saturate
    segment
        .parse::<u64>()
        .map_err(|_| Error::malformed_url(href, format!("id '{segment}' is out of range")))
}

/// Read the trailing segment of an href verbatim
///
/// Used for UUIDs and other opaque ids. Fails with [`Error::MalformedUrl`]
/// when the path has no non-empty last segment.
pub fn get_uuid_from_href(href: &str) -> Result<String> {
    let segment = HrefParts::split(href).last_segment();
    if segment.is_empty() {
        return Err(Error::malformed_url(href, "href has no trailing path segment"));
    }
    Ok(segment.to_string())
}
