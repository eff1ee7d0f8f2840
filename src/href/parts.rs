//! Textual href decomposition

/// An href split into prefix, path and tail
///
/// ```text
/// http://www.testsite.com/v1.1/images?limit=10#top
/// └──────── prefix ─────┘└── path ──┘└── tail ───┘
/// ```
///
/// The prefix holds the scheme and authority and is empty for bare paths.
/// The tail holds the query string and fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HrefParts<'a> {
    /// Scheme and authority (`http://host:port`), possibly empty
    pub prefix: &'a str,
    /// Path, starting with `/` when a prefix is present
    pub path: &'a str,
    /// Query and fragment, including the leading `?` or `#`
    pub tail: &'a str,
}

impl<'a> HrefParts<'a> {
    /// Split an href into its parts
    pub fn split(href: &'a str) -> Self {
        let tail_start = href.find(['?', '#']).unwrap_or(href.len());
        let head = &href[..tail_start];

        let authority_start = if let Some(scheme_end) = head.find("://") {
            Some(scheme_end + 3)
        } else if head.starts_with("//") {
            Some(2)
        } else {
            None
        };

        let path_start = match authority_start {
            Some(start) => head[start..].find('/').map_or(head.len(), |p| start + p),
            None => 0,
        };

        Self {
            prefix: &head[..path_start],
            path: &head[path_start..],
            tail: &href[tail_start..],
        }
    }

    /// Iterate over the `/`-separated path segments
    ///
    /// A path with a leading `/` yields an empty first segment.
    pub fn segments(&self) -> std::str::Split<'a, char> {
        self.path.split('/')
    }

    /// The text after the last `/` of the path
    pub fn last_segment(&self) -> &'a str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    /// Rebuild the href with a replacement path
    pub fn with_path(&self, path: &str) -> String {
        format!("{}{}{}", self.prefix, path, self.tail)
    }
}
