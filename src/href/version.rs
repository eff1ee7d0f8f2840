//! Version segment removal

use super::parts::HrefParts;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching a whole version segment: `v1`, `v1.1`, `v10.10`
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+(?:\.[0-9]+)?$").unwrap());

/// Check if a single path segment is an API version
pub fn is_version_segment(segment: &str) -> bool {
    VERSION_REGEX.is_match(segment)
}

/// Remove the first version segment from an href
///
/// The segment is dropped together with the `/` in front of it, so
/// `http://host/v1.1/images` becomes `http://host/images` and
/// `http://host/v1.1` becomes `http://host`. Version-like segments after the
/// first one are kept. Fails with [`Error::MalformedUrl`] when no path segment
/// is a version.
pub fn remove_version_from_href(href: &str) -> Result<String> {
    let parts = HrefParts::split(href);
    let segments: Vec<&str> = parts.segments().collect();

    let index = segments
        .iter()
        .position(|segment| is_version_segment(segment))
        .ok_or_else(|| Error::malformed_url(href, "href does not contain a version segment"))?;

    let path = segments
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, segment)| *segment)
        .collect::<Vec<_>>()
        .join("/");

    let stripped = parts.with_path(&path);
    tracing::debug!(href, stripped = %stripped, "Removed version from href");
    Ok(stripped)
}
