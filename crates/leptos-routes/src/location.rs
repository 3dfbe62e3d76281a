//! Location Parsing
//!
//! Splits an href into path, query and hash and normalises the path.
//! Segments are never percent-decoded: a captured value is exactly what
//! appeared in the URL.

use std::fmt;

/// A parsed, normalised navigation target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Normalised path, always starting with `/`
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl Location {
    /// Parse an href such as `/app/notibee?ref=x#top`.
    ///
    /// Absolute URLs (`https://host/path`) are reduced to their path part.
    pub fn parse(href: &str) -> Self {
        let href = href.trim();

        let (rest, hash) = match href.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (href, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: normalize_path(strip_origin(path)),
            query,
            hash,
        }
    }

    /// Path segments in order, empty segments dropped
    pub fn segments(&self) -> Vec<&str> {
        split_segments(&self.path)
    }

    /// Build a location for `path` keeping this location's query and hash
    pub fn with_path(&self, path: &str) -> Self {
        Self {
            path: normalize_path(path),
            query: self.query.clone(),
            hash: self.hash.clone(),
        }
    }

    /// Render back to an href
    pub fn href(&self) -> String {
        let mut out = self.path.clone();
        if let Some(q) = &self.query {
            out.push('?');
            out.push_str(q);
        }
        if let Some(h) = &self.hash {
            out.push('#');
            out.push_str(h);
        }
        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// `"app//notibee/"` -> `"/app/notibee"`, `""` -> `"/"`
pub fn normalize_path(path: &str) -> String {
    let segments = split_segments(path);
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::with_capacity(path.len() + 1);
    for seg in segments {
        out.push('/');
        out.push_str(seg);
    }
    out
}

/// `https://host/a` -> `/a`. Only applies when the href does not start
/// with `/` and `://` is its first separator.
fn strip_origin(path: &str) -> &str {
    if path.starts_with('/') {
        return path;
    }
    match path.split_once("://") {
        Some((scheme, after_scheme)) if !scheme.contains('/') => match after_scheme.find('/') {
            Some(start) => &after_scheme[start..],
            None => "/",
        },
        _ => path,
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let loc = Location::parse("/");
        assert_eq!(loc.path, "/");
        assert!(loc.segments().is_empty());
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn test_parse_query_and_hash() {
        let loc = Location::parse("/app/notibee?ref=home#stats");
        assert_eq!(loc.path, "/app/notibee");
        assert_eq!(loc.query.as_deref(), Some("ref=home"));
        assert_eq!(loc.hash.as_deref(), Some("stats"));
        assert_eq!(loc.href(), "/app/notibee?ref=home#stats");
    }

    #[test]
    fn test_normalize_slashes() {
        assert_eq!(normalize_path("app//notibee/"), "/app/notibee");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_no_percent_decoding() {
        let loc = Location::parse("/Alice%20B");
        assert_eq!(loc.segments(), vec!["Alice%20B"]);
    }

    #[test]
    fn test_absolute_url_reduced_to_path() {
        assert_eq!(Location::parse("https://example.com/alice?x=1").href(), "/alice?x=1");
        assert_eq!(Location::parse("https://example.com").path, "/");
    }

    #[test]
    fn test_scheme_inside_query_or_hash_is_not_an_origin() {
        let loc = Location::parse("/alice?ref=https://t.co/bob");
        assert_eq!(loc.path, "/alice");
        assert_eq!(loc.query.as_deref(), Some("ref=https://t.co/bob"));

        let loc = Location::parse("/app/notibee#https://x.io/");
        assert_eq!(loc.path, "/app/notibee");
        assert_eq!(loc.hash.as_deref(), Some("https://x.io/"));

        let loc = Location::parse("https://example.com/alice?next=http://a.b/c#d");
        assert_eq!(loc.path, "/alice");
        assert_eq!(loc.query.as_deref(), Some("next=http://a.b/c"));
    }

    #[test]
    fn test_with_path_keeps_query() {
        let loc = Location::parse("/alice?from=qr");
        assert_eq!(loc.with_path("/notibee/alice").href(), "/notibee/alice?from=qr");
    }
}
