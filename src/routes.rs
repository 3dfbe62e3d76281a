//! Site Routes
//!
//! URL surface of the site. Order matters: the short-link catch-all sits
//! below every static route so `/`, `/app/...` and `/notibee/...` are
//! never rewritten. `RouteTable::build` rejects an order where it would
//! shadow them.

use leptos_routes::{RouteResult, RouteTable};

/// Catalog id the short links and the anonymous page belong to
pub const SHORT_LINK_APP: &str = "notibee";

/// Page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    /// Param `id`
    AppDetail,
    /// Param `username`
    AnonymousBuzz,
    NotFound,
}

pub fn route_table() -> RouteResult<RouteTable<Page>> {
    RouteTable::builder()
        .route("/", Page::Home)
        .redirect("/app", "/")
        .route("/app/:id", Page::AppDetail)
        .redirect("/notibee", "/app/notibee")
        .route("/notibee/:username", Page::AnonymousBuzz)
        .redirect("/:username", "/notibee/:username")
        .route("/*rest", Page::NotFound)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_routes::{NavOutcome, NavTrigger, Navigator};

    fn resolve(href: &str) -> leptos_routes::Resolved<Page> {
        route_table().unwrap().resolve(href).unwrap()
    }

    #[test]
    fn test_home() {
        let r = resolve("/");
        assert_eq!(r.view, Page::Home);
        assert!(r.params.is_empty());
    }

    #[test]
    fn test_app_detail() {
        let r = resolve("/app/notibee");
        assert_eq!(r.view, Page::AppDetail);
        assert_eq!(r.param("id"), Some("notibee"));

        // unknown ids still dispatch; the view handles "not found"
        let r = resolve("/app/nonexistent");
        assert_eq!(r.view, Page::AppDetail);
        assert_eq!(r.param("id"), Some("nonexistent"));
    }

    #[test]
    fn test_short_link_redirect() {
        let r = resolve("/alice");
        assert_eq!(r.view, Page::AnonymousBuzz);
        assert_eq!(r.location.path, "/notibee/alice");
        assert_eq!(r.param("username"), Some("alice"));
        assert_eq!(r.redirected_from.map(|l| l.path), Some("/alice".to_string()));
    }

    #[test]
    fn test_short_link_preserves_segment_exactly() {
        let r = resolve("/Alice%20B");
        assert_eq!(r.location.path, "/notibee/Alice%20B");
        assert_eq!(r.param("username"), Some("Alice%20B"));
    }

    #[test]
    fn test_anonymous_direct() {
        let r = resolve("/notibee/bob");
        assert_eq!(r.view, Page::AnonymousBuzz);
        assert!(!r.was_redirected());
    }

    #[test]
    fn test_static_routes_beat_catch_all() {
        let r = resolve("/app");
        assert_eq!(r.view, Page::Home);
        assert_eq!(r.location.path, "/");

        let r = resolve("/notibee");
        assert_eq!(r.view, Page::AppDetail);
        assert_eq!(r.param("id"), Some("notibee"));
    }

    #[test]
    fn test_prefix_lookalikes_use_catch_all() {
        for name in ["app-lover", "notibeefan", "apps"] {
            let r = resolve(&format!("/{}", name));
            assert_eq!(r.view, Page::AnonymousBuzz, "{}", name);
            assert_eq!(r.param("username"), Some(name));
        }
    }

    #[test]
    fn test_deep_paths_not_found() {
        assert_eq!(resolve("/a/b/c").view, Page::NotFound);
        assert_eq!(resolve("/app/notibee/extra").view, Page::NotFound);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        let r = resolve("/app/the-fold/?ref=home");
        assert_eq!(r.view, Page::AppDetail);
        assert_eq!(r.param("id"), Some("the-fold"));
        assert_eq!(r.location.query.as_deref(), Some("ref=home"));
    }

    #[test]
    fn test_urls_inside_query_or_hash_do_not_change_route() {
        let r = resolve("/alice?ref=https://t.co/bob");
        assert_eq!(r.view, Page::AnonymousBuzz);
        assert_eq!(r.location.path, "/notibee/alice");
        assert_eq!(r.param("username"), Some("alice"));
        assert_eq!(r.location.query.as_deref(), Some("ref=https://t.co/bob"));

        let r = resolve("/app/notibee#https://x.io/");
        assert_eq!(r.view, Page::AppDetail);
        assert_eq!(r.param("id"), Some("notibee"));
        assert_eq!(r.location.hash.as_deref(), Some("https://x.io/"));
    }

    #[test]
    fn test_renavigation_is_idempotent() {
        let mut nav = Navigator::new(route_table().unwrap());
        assert!(matches!(
            nav.navigate("/app/notibee", NavTrigger::Link).unwrap(),
            NavOutcome::Changed { .. }
        ));
        let before = nav.current().cloned();
        assert!(matches!(
            nav.navigate("/app/notibee", NavTrigger::Link).unwrap(),
            NavOutcome::Unchanged
        ));
        assert_eq!(nav.current().cloned(), before);
    }
}
