//! Hash-based routing

use std::collections::HashMap;

use tracing::debug;

use crate::registry::NOT_FOUND_ROUTE;

/// Maps route keys to page module paths.
///
/// Built incrementally as pages are registered; the reserved `404` key
/// designates the not-found handler.
#[derive(Debug, Default)]
pub struct Router {
    routes: HashMap<String, String>,
}

impl Router {
    pub fn new() -> Router {
        Router::default()
    }

    pub fn add_route(&mut self, route: impl Into<String>, page_path: impl Into<String>) {
        self.routes.insert(route.into(), page_path.into());
    }

    /// Normalize a location hash to a route key: the leading `#` and an
    /// optional leading slash are stripped.
    pub fn normalize(hash: &str) -> &str {
        let key = hash.strip_prefix('#').unwrap_or(hash);
        key.strip_prefix('/').unwrap_or(key)
    }

    /// Resolve a location hash to a page path.
    ///
    /// An empty hash resolves to `None` (the caller renders the start
    /// page); an unknown key falls back to the `404` route.
    pub fn resolve(&self, hash: &str) -> Option<&str> {
        let key = Self::normalize(hash);
        if key.is_empty() {
            return None;
        }
        match self.routes.get(key) {
            Some(path) => Some(path.as_str()),
            None => {
                debug!(%key, "unresolved route, falling back to 404");
                self.routes.get(NOT_FOUND_ROUTE).map(String::as_str)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        let mut router = Router::new();
        router.add_route("home", "home.js");
        router.add_route("about", "about.js");
        router.add_route(NOT_FOUND_ROUTE, "not_found.js");
        router
    }

    #[test]
    fn test_resolve_with_and_without_leading_slash() {
        let router = router();
        assert_eq!(router.resolve("#about"), Some("about.js"));
        assert_eq!(router.resolve("#/about"), Some("about.js"));
        assert_eq!(router.resolve("about"), Some("about.js"));
    }

    #[test]
    fn test_empty_hash_resolves_to_none() {
        let router = router();
        assert_eq!(router.resolve(""), None);
        assert_eq!(router.resolve("#"), None);
        assert_eq!(router.resolve("#/"), None);
    }

    #[test]
    fn test_unknown_route_falls_back_to_not_found() {
        let router = router();
        assert_eq!(router.resolve("#missing"), Some("not_found.js"));
    }

    #[test]
    fn test_no_not_found_route_registered() {
        let mut router = Router::new();
        router.add_route("home", "home.js");
        assert_eq!(router.resolve("#missing"), None);
    }
}
