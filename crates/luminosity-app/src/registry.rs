//! Page and component registries
//!
//! The original framework loaded modules dynamically by path; here the
//! manifest is explicit: callers register page and component descriptors
//! up front, keyed by the same module-path strings the config uses.
//! Route keys are derived by stripping the path's extension
//! (`home.js` serves the `home` route).

use std::collections::HashMap;
use std::rc::Rc;

use tracing::info;

use crate::page::{Component, Page};

/// Reserved route key for the not-found handler.
pub const NOT_FOUND_ROUTE: &str = "404";

/// Derive the route key from a page module path.
pub fn route_key(path: &str) -> &str {
    match path.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => path,
    }
}

/// Statically-populated page and component manifest.
#[derive(Default)]
pub struct Registry {
    pages: HashMap<String, Rc<dyn Page>>,
    components: HashMap<String, Component>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn register_page(&mut self, path: impl Into<String>, page: Rc<dyn Page>) {
        let path = path.into();
        info!(%path, "Luminosity: Page registered");
        self.pages.insert(path, page);
    }

    pub fn register_component(&mut self, path: impl Into<String>, component: Component) {
        self.components.insert(path.into(), component);
    }

    pub fn page(&self, path: &str) -> Option<Rc<dyn Page>> {
        self.pages.get(path).cloned()
    }

    pub fn component(&self, path: &str) -> Option<Component> {
        self.components.get(path).cloned()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("pages", &self.pages.len())
            .field("components", &self.components.len())
            .finish()
    }
}
