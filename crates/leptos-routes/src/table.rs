//! Route Table
//!
//! An ordered list of pattern -> action rules. The first matching rule wins.
//! Redirect rules are followed during resolution, so a view is only ever
//! chosen for the final path.

use crate::error::{RouteError, RouteResult};
use crate::location::Location;
use crate::params::Params;
use crate::pattern::RoutePattern;

/// Maximum number of redirect hops followed by a single resolution
pub const MAX_REDIRECTS: usize = 8;

/// What a matched rule does
#[derive(Debug, Clone)]
pub enum RouteAction<R> {
    /// Render the given view with the captured params
    Render(R),
    /// Rewrite to the filled template and resolve again
    Redirect(RoutePattern),
}

#[derive(Debug, Clone)]
struct Route<R> {
    pattern: RoutePattern,
    action: RouteAction<R>,
}

/// Result of resolving an href against a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<R> {
    pub view: R,
    pub params: Params,
    /// Final location after any redirects
    pub location: Location,
    /// Originally requested location, set only when a redirect happened
    pub redirected_from: Option<Location>,
}

impl<R> Resolved<R> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Builder collecting rules in priority order
pub struct RouteTableBuilder<R> {
    rules: Vec<(String, Pending<R>)>,
}

enum Pending<R> {
    Render(R),
    Redirect(String),
}

impl<R> RouteTableBuilder<R> {
    /// Add a rule rendering `view`
    pub fn route(mut self, pattern: &str, view: R) -> Self {
        self.rules.push((pattern.to_string(), Pending::Render(view)));
        self
    }

    /// Add a rule redirecting to `target`, a pattern filled from the captured params
    pub fn redirect(mut self, pattern: &str, target: &str) -> Self {
        self.rules.push((pattern.to_string(), Pending::Redirect(target.to_string())));
        self
    }

    /// Parse and validate all rules.
    ///
    /// Fails when a pattern is malformed, when a redirect needs a parameter its
    /// source does not capture, or when a rule is unreachable because an
    /// earlier rule matches every path it would.
    pub fn build(self) -> RouteResult<RouteTable<R>> {
        let mut routes: Vec<Route<R>> = Vec::with_capacity(self.rules.len());

        for (raw, pending) in self.rules {
            let pattern = RoutePattern::parse(&raw)?;

            if let Some(earlier) = routes.iter().find(|r| r.pattern.covers(&pattern)) {
                return Err(RouteError::Shadowed {
                    route: raw,
                    by: earlier.pattern.as_str().to_string(),
                });
            }

            let action = match pending {
                Pending::Render(view) => RouteAction::Render(view),
                Pending::Redirect(target) => {
                    let target = RoutePattern::parse(&target)?;
                    let captured: Vec<&str> = pattern.param_names().collect();
                    if let Some(missing) = target.param_names().find(|n| !captured.contains(n)) {
                        return Err(RouteError::MissingParam {
                            template: target.as_str().to_string(),
                            param: missing.to_string(),
                        });
                    }
                    RouteAction::Redirect(target)
                }
            };

            routes.push(Route { pattern, action });
        }

        Ok(RouteTable { routes })
    }
}

/// Validated, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable<R> {
    routes: Vec<Route<R>>,
}

impl<R: Clone> RouteTable<R> {
    pub fn builder() -> RouteTableBuilder<R> {
        RouteTableBuilder { rules: Vec::new() }
    }

    /// Find the first rule matching `location` without following redirects
    pub fn match_location(&self, location: &Location) -> Option<(&RouteAction<R>, Params)> {
        let segments = location.segments();
        self.routes
            .iter()
            .find_map(|r| r.pattern.match_segments(&segments).map(|p| (&r.action, p)))
    }

    /// Resolve an href to a view, following redirects.
    ///
    /// Query string and hash are carried across redirects unchanged.
    pub fn resolve(&self, href: &str) -> RouteResult<Resolved<R>> {
        let requested = Location::parse(href);
        let mut location = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let (action, params) = self
                .match_location(&location)
                .ok_or_else(|| RouteError::NoMatch(location.path.clone()))?;

            match action {
                RouteAction::Render(view) => {
                    let redirected_from = if location != requested {
                        Some(requested)
                    } else {
                        None
                    };
                    return Ok(Resolved {
                        view: view.clone(),
                        params,
                        location,
                        redirected_from,
                    });
                }
                RouteAction::Redirect(target) => {
                    let path = target.fill(&params)?;
                    location = location.with_path(&path);
                }
            }
        }

        Err(RouteError::RedirectLoop(requested.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        Detail,
        User,
    }

    fn table() -> RouteTable<View> {
        RouteTable::builder()
            .route("/", View::Home)
            .route("/app/:id", View::Detail)
            .route("/u/:name", View::User)
            .redirect("/:name", "/u/:name")
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let t = table();
        assert_eq!(t.resolve("/").unwrap().view, View::Home);
        let r = t.resolve("/app/x").unwrap();
        assert_eq!(r.view, View::Detail);
        assert_eq!(r.param("id"), Some("x"));
        assert!(!r.was_redirected());
    }

    #[test]
    fn test_redirect_is_followed() {
        let r = table().resolve("/bob?src=qr").unwrap();
        assert_eq!(r.view, View::User);
        assert_eq!(r.location.href(), "/u/bob?src=qr");
        assert_eq!(r.redirected_from.map(|l| l.path), Some("/bob".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(table().resolve("/a/b/c"), Err(RouteError::NoMatch("/a/b/c".into())));
    }

    #[test]
    fn test_catch_all_first_is_rejected() {
        let result = RouteTable::builder()
            .redirect("/:name", "/u/:name")
            .route("/app", View::Home)
            .build();
        assert!(matches!(result, Err(RouteError::Shadowed { .. })));
    }

    #[test]
    fn test_redirect_needs_captured_param() {
        let result = RouteTable::<View>::builder().redirect("/:name", "/u/:other").build();
        assert!(matches!(result, Err(RouteError::MissingParam { .. })));
    }

    #[test]
    fn test_redirect_loop_detected() {
        let t = RouteTable::<View>::builder()
            .redirect("/a", "/b")
            .redirect("/b", "/a")
            .build()
            .unwrap();
        assert_eq!(t.resolve("/a"), Err(RouteError::RedirectLoop("/a".into())));
    }
}
