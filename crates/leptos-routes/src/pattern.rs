//! Route Patterns
//!
//! Segment-based patterns: `/`, `/app/:id`, `/:username`, `/*rest`.
//! Matching is purely per segment; a static segment only matches the exact
//! same text, so `/app-lover` never matches `/app/:id`.

use crate::error::{RouteError, RouteResult};
use crate::params::Params;

/// One segment of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Static(String),
    /// `:name`, captures exactly one segment
    Param(String),
    /// `*name`, captures zero or more trailing segments (last position only)
    Wildcard(String),
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        if !pattern.starts_with('/') {
            return Err(RouteError::InvalidPattern(pattern.to_string()));
        }

        let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(raw.len());
        for (idx, seg) in raw.iter().enumerate() {
            let parsed = if let Some(name) = seg.strip_prefix(':') {
                Segment::Param(param_name(pattern, name)?)
            } else if let Some(name) = seg.strip_prefix('*') {
                if idx + 1 != raw.len() {
                    return Err(RouteError::InvalidPattern(pattern.to_string()));
                }
                Segment::Wildcard(param_name(pattern, name)?)
            } else {
                Segment::Static(seg.to_string())
            };
            segments.push(parsed);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all captured parameters, in pattern order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(n) | Segment::Wildcard(n) => Some(n.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match already-split path segments
    pub fn match_segments(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::new();
        for (idx, seg) in self.segments.iter().enumerate() {
            match seg {
                Segment::Wildcard(name) => {
                    params.insert(name.as_str(), path[idx.min(path.len())..].join("/"));
                    return Some(params);
                }
                Segment::Static(text) => {
                    if path.get(idx) != Some(&text.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(idx)?;
                    params.insert(name.as_str(), *value);
                }
            }
        }
        if path.len() == self.segments.len() { Some(params) } else { None }
    }

    /// True when every path matched by `other` is also matched by `self`
    pub fn covers(&self, other: &RoutePattern) -> bool {
        for (idx, seg) in self.segments.iter().enumerate() {
            let theirs = other.segments.get(idx);
            match (seg, theirs) {
                (Segment::Wildcard(_), _) => return true,
                (_, None) | (_, Some(Segment::Wildcard(_))) => return false,
                (Segment::Param(_), Some(_)) => {}
                (Segment::Static(a), Some(Segment::Static(b))) if a == b => {}
                (Segment::Static(_), Some(_)) => return false,
            }
        }
        self.segments.len() == other.segments.len()
    }

    /// Render this pattern as a concrete path using `params`
    pub fn fill(&self, params: &Params) -> RouteResult<String> {
        let mut out = String::new();
        for seg in &self.segments {
            let text = match seg {
                Segment::Static(text) => text.as_str(),
                Segment::Param(name) | Segment::Wildcard(name) => {
                    params.get(name).ok_or_else(|| RouteError::MissingParam {
                        template: self.source.clone(),
                        param: name.clone(),
                    })?
                }
            };
            if !text.is_empty() {
                out.push('/');
                out.push_str(text);
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

fn param_name(pattern: &str, name: &str) -> RouteResult<String> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(RouteError::InvalidPattern(pattern.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(s: &str) -> RoutePattern {
        RoutePattern::parse(s).unwrap()
    }

    #[test]
    fn test_parse_rejects_bad_patterns() {
        assert!(RoutePattern::parse("app/:id").is_err());
        assert!(RoutePattern::parse("/app/:").is_err());
        assert!(RoutePattern::parse("/*rest/tail").is_err());
        assert!(RoutePattern::parse("/:user-name").is_err());
    }

    #[test]
    fn test_static_and_param_match() {
        let p = pat("/app/:id");
        let params = p.match_segments(&["app", "notibee"]).unwrap();
        assert_eq!(params.get("id"), Some("notibee"));
        assert!(p.match_segments(&["app"]).is_none());
        assert!(p.match_segments(&["app", "a", "b"]).is_none());
        assert!(p.match_segments(&["app-lover", "x"]).is_none());
    }

    #[test]
    fn test_root_matches_only_empty() {
        let p = pat("/");
        assert!(p.match_segments(&[]).is_some());
        assert!(p.match_segments(&["alice"]).is_none());
    }

    #[test]
    fn test_wildcard_captures_rest() {
        let p = pat("/*rest");
        assert_eq!(p.match_segments(&["a", "b", "c"]).unwrap().get("rest"), Some("a/b/c"));
        assert_eq!(p.match_segments(&[]).unwrap().get("rest"), Some(""));
    }

    #[test]
    fn test_covers() {
        assert!(pat("/:username").covers(&pat("/app")));
        assert!(!pat("/app").covers(&pat("/:username")));
        assert!(!pat("/:username").covers(&pat("/app/:id")));
        assert!(pat("/*rest").covers(&pat("/app/:id")));
        assert!(!pat("/app/:id").covers(&pat("/*rest")));
        assert!(pat("/app/:id").covers(&pat("/app/:other")));
    }

    #[test]
    fn test_fill_template() {
        let params: Params = [("username", "Alice")].into_iter().collect();
        assert_eq!(pat("/notibee/:username").fill(&params).unwrap(), "/notibee/Alice");
        assert_eq!(pat("/").fill(&params).unwrap(), "/");
        assert!(matches!(
            pat("/app/:id").fill(&params),
            Err(RouteError::MissingParam { .. })
        ));
    }
}
