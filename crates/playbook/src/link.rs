use url::{ParseError, Url};

use crate::entry::EntryId;

/// Query parameter carrying the entry id in a share link.
pub const SHARE_PARAM: &str = "system";

/// Where the playbook page is served from: `origin` is scheme + host
/// (+ port), `path` the page path without query or fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    origin: String,
    path: String,
}

impl PageLocation {
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_owned();
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self { origin, path }
    }

    /// Split a full page URL into origin and path, dropping any query or
    /// fragment. Default ports are dropped from the origin. A bare
    /// `host/path` is read as `https`. Returns `None` for anything that has
    /// no host-based origin.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = parse_lenient(url)?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return None;
        }
        Some(Self::new(origin.ascii_serialization(), url.path()))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `<origin><path>?system=<id>`
    pub fn share_url(&self, id: &EntryId) -> String {
        format!("{}{}?{SHARE_PARAM}={}", self.origin, self.path, id)
    }
}

fn parse_lenient(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}")).ok(),
        Err(_) => None,
    }
}

/// Extract the entry id from a share link's `system` parameter, percent-decoded.
/// Returns `None` when the link does not parse or the parameter is missing
/// or empty.
pub fn parse_deep_link(url: &str) -> Option<EntryId> {
    parse_lenient(url)?
        .query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(EntryId::new)
}
