//! Href helpers
//!
//! Helpers for taking apart resource links returned by the API:
//! - strip the version segment (`/v1.1`) from an href
//! - read a trailing integer id (`.../servers/45`)
//! - read a trailing opaque token such as a UUID
//!
//! Hrefs are split textually rather than normalized through a URL parser, so
//! whatever the caller passed in comes back byte-for-byte except for the
//! removed segment.

mod parts;
mod resource;
mod version;

pub use parts::HrefParts;
pub use resource::{get_id_from_href, get_uuid_from_href};
pub use version::{is_version_segment, remove_version_from_href};
