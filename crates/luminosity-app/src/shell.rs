//! The application shell
//!
//! Sequential lifecycle: check config, initialize state and renderer,
//! set document metadata, render the loading page, initialize the
//! lifecycle and configured pages, apply global css, resolve the current
//! route, render the start page. Navigation re-mounts the routed page;
//! state updates diff through the patch engine.
//!
//! The shell is an explicit context object: [`App`] is a cheap clonable
//! handle over the shared core, passed to pages and captured by event
//! handlers. Tests construct it directly; there is no process-wide
//! singleton.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, error, info};

use luminosity_core::document::Document;
use luminosity_core::error::{Error, Result};
use luminosity_core::events::DomEvent;
use luminosity_purity::{el, Purity, View};

use crate::config::{Config, RawConfig};
use crate::page::Page;
use crate::registry::{route_key, Registry, NOT_FOUND_ROUTE};
use crate::router::Router;
use crate::state::{AppState, StateMap};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum RenderMode {
    Mount,
    Rerender,
}

struct ShellInner {
    config: Config,
    document: Rc<RefCell<Document>>,
    engine: Purity,
    state: AppState,
    registry: Registry,
    router: Router,
    current_page: Option<String>,
    initialized: HashSet<String>,
    location_hash: String,
    in_error_handler: bool,
}

/// Handle to the running application.
#[derive(Clone)]
pub struct App {
    inner: Rc<RefCell<ShellInner>>,
}

impl App {
    /// Check the configuration and construct the shell.
    ///
    /// A missing required config field is logged and yields `None`;
    /// initialization halts there (spec: logged, not raised).
    pub fn new(raw: RawConfig, document: Rc<RefCell<Document>>) -> Option<App> {
        let config = raw.check()?;
        let state = AppState::new(config.main.init_with_states.clone());
        let engine = Purity::new(document.clone());

        info!("Luminosity v{VERSION} initialized");

        Some(App {
            inner: Rc::new(RefCell::new(ShellInner {
                config,
                document,
                engine,
                state,
                registry: Registry::new(),
                router: Router::new(),
                current_page: None,
                initialized: HashSet::new(),
                location_hash: String::new(),
                in_error_handler: false,
            })),
        })
    }

    /// Register a page under its module path; the route key is the path
    /// minus its extension.
    pub fn register_page(&self, path: impl Into<String>, page: Rc<dyn Page>) {
        let path = path.into();
        let mut inner = self.inner.borrow_mut();
        inner.router.add_route(route_key(&path).to_string(), path.clone());
        inner.registry.register_page(path, page);
    }

    pub fn register_component(&self, path: impl Into<String>, component: crate::page::Component) {
        self.inner
            .borrow_mut()
            .registry
            .register_component(path, component);
    }

    pub fn document(&self) -> Rc<RefCell<Document>> {
        self.inner.borrow().document.clone()
    }

    pub fn config(&self) -> Config {
        self.inner.borrow().config.clone()
    }

    /// The page module path currently rendered, if any.
    pub fn current_page(&self) -> Option<String> {
        self.inner.borrow().current_page.clone()
    }

    // ─────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Run the startup sequence and render the start page (or the routed
    /// page when a location hash is set).
    pub fn start(&self) -> Result<()> {
        let main = self.config().main;

        self.set_metadata();

        // Loading page first so slow page setup has something on screen.
        self.init_page(&main.loading_page);
        self.render_page(&main.loading_page, RenderMode::Mount)?;

        self.init_page(&main.start_page);
        self.init_page(&main.on_error.page);
        self.init_page(&main.not_found_page);
        self.inner
            .borrow_mut()
            .router
            .add_route(NOT_FOUND_ROUTE, main.not_found_page.clone());

        let pages = self.config().pages;
        for path in pages.values() {
            self.init_page(path);
        }
        info!("Luminosity: Pages loaded");

        {
            let inner = self.inner.borrow();
            let mut doc = inner.document.borrow_mut();
            for (name, value) in &inner.config.main.global_css {
                doc.set_css_var(name.clone(), value.clone());
            }
        }

        let routed = {
            let inner = self.inner.borrow();
            inner
                .router
                .resolve(&inner.location_hash)
                .map(str::to_string)
        };
        match routed {
            Some(path) => self.render_page(&path, RenderMode::Mount)?,
            None => self.render_page(&main.start_page, RenderMode::Mount)?,
        }

        info!("Luminosity: Started");
        Ok(())
    }

    fn set_metadata(&self) {
        let inner = self.inner.borrow();
        let mut doc = inner.document.borrow_mut();
        doc.set_title(&inner.config.main.title);
        doc.set_meta("author", &inner.config.main.author);
        doc.set_meta("description", &inner.config.main.description);
        doc.set_favicon(&inner.config.main.favicon);
        debug!("Luminosity: Metadata set");
    }

    /// Call a page's `init` once, the first time the shell touches it.
    fn init_page(&self, path: &str) {
        let page = {
            let mut inner = self.inner.borrow_mut();
            if !inner.initialized.insert(path.to_string()) {
                return;
            }
            inner.registry.page(path)
        };
        match page {
            Some(page) => page.init(&PageContext::new(self.clone())),
            None => error!("Luminosity: {}", Error::missing_page(path)),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────

    /// Navigate to a location hash (with or without a leading `#`/`/`).
    /// Unresolvable routes fall back to the not-found page.
    pub fn navigate(&self, hash: &str) -> Result<()> {
        let routed = {
            let mut inner = self.inner.borrow_mut();
            inner.location_hash = hash.to_string();
            inner.router.resolve(hash).map(str::to_string)
        };
        let start_page = self.config().main.start_page;
        let path = routed.unwrap_or(start_page);
        self.render_page(&path, RenderMode::Mount)
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────

    fn render_page(&self, path: &str, mode: RenderMode) -> Result<()> {
        let page = { self.inner.borrow().registry.page(path) };
        let Some(page) = page else {
            error!("Luminosity: {}", Error::missing_page(path));
            return Ok(());
        };
        {
            self.inner.borrow_mut().current_page = Some(path.to_string());
        }

        let ctx = PageContext::new(self.clone());
        let title = page.title(&ctx);
        let (style, view) = match page_output(page.as_ref(), &ctx) {
            Ok(output) => output,
            Err(e) => {
                error!("Luminosity: Error rendering page: {e}");
                (String::new(), fallback_view())
            }
        };

        {
            let inner = self.inner.borrow();
            let mut doc = inner.document.borrow_mut();
            doc.set_style(style);
            if let Some(title) = title {
                doc.set_title(title);
            }
        }

        let output = { self.inner.borrow_mut().engine.prepare(view) };
        let result = {
            let mut inner = self.inner.borrow_mut();
            match mode {
                RenderMode::Mount => inner.engine.mount(output),
                RenderMode::Rerender => inner.engine.rerender(output),
            }
        };
        if result.is_ok() {
            debug!(%path, "Luminosity: Page rendered");
        }
        result
    }

    fn rerender_current(&self) -> Result<()> {
        let Some(path) = self.current_page() else {
            return Ok(());
        };
        self.render_page(&path, RenderMode::Rerender)
    }

    // ─────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────

    pub fn get_state(&self) -> StateMap {
        self.inner.borrow().state.snapshot()
    }

    pub fn state_value(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.borrow().state.get(key).cloned()
    }

    /// Shallow-merge `patch` into the state and synchronously rerender
    /// the current page. No batching: every call is a full pass.
    pub fn set_state(&self, patch: StateMap) {
        {
            self.inner.borrow_mut().state.merge(patch);
        }
        if let Err(e) = self.rerender_current() {
            self.rendering_failed(e);
        }
    }

    /// Re-render the current page without a state change (the page
    /// `stateUpdate` callback).
    pub fn update(&self) {
        let Some(path) = self.current_page() else {
            return;
        };
        if let Err(e) = self.render_page(&path, RenderMode::Mount) {
            self.rendering_failed(e);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────

    /// Dispatch a DOM event: bound element handlers fire first (bubbling
    /// from the target), then the current page's `on_event` receives it.
    pub fn dispatch(&self, event: &DomEvent) {
        let handlers = match &event.target {
            Some(target) => {
                let inner = self.inner.borrow();
                let doc = inner.document.borrow();
                doc.handlers_for(target, event.kind)
            }
            None => Vec::new(),
        };
        for handler in handlers {
            handler(event);
        }

        let page = {
            let inner = self.inner.borrow();
            inner
                .current_page
                .as_ref()
                .and_then(|path| inner.registry.page(path))
        };
        if let Some(page) = page {
            page.on_event(event, &PageContext::new(self.clone()));
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Error channel
    // ─────────────────────────────────────────────────────────────

    /// Route an error to the error page: log it, render the configured
    /// error page, merge the detail into state under `error`.
    pub fn report_error(&self, info: impl Into<String>) {
        let info = info.into();
        error!("{info}");

        {
            let mut inner = self.inner.borrow_mut();
            if inner.in_error_handler {
                return;
            }
            inner.in_error_handler = true;
        }

        let error_page = self.config().main.on_error.page;
        if let Err(e) = self.render_page(&error_page, RenderMode::Mount) {
            error!("Luminosity: Error page failed to render: {e}");
        }
        let mut patch = StateMap::new();
        patch.insert("error".to_string(), serde_json::Value::String(info));
        self.set_state(patch);

        self.inner.borrow_mut().in_error_handler = false;
    }

    /// A mount/rerender integrity failure: unrecoverable for the pass,
    /// surfaced through the error channel.
    fn rendering_failed(&self, e: luminosity_core::Error) {
        if self.inner.borrow().in_error_handler {
            error!("Luminosity: Rendering failed inside error handler: {e}");
            return;
        }
        self.report_error(e.to_string());
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("App")
    }
}

/// The fallback fragment shown when a page's render step fails.
fn fallback_view() -> View {
    el("div")
        .id("root")
        .child(el("a").text("Error rendering page"))
        .into()
}

/// Style and view for one render pass; a failure in either step takes
/// the fallback path.
fn page_output(page: &dyn Page, ctx: &PageContext) -> Result<(String, View)> {
    let style = page.style(ctx)?;
    let view = page.render(ctx)?;
    Ok((style, view))
}

/// Context handed to every page lifecycle call and captured by event
/// handlers.
#[derive(Clone, Debug)]
pub struct PageContext {
    app: App,
}

impl PageContext {
    pub fn new(app: App) -> PageContext {
        PageContext { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn state(&self) -> StateMap {
        self.app.get_state()
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.app.state_value(key)
    }

    pub fn set_state(&self, patch: StateMap) {
        self.app.set_state(patch);
    }

    /// Re-render the current page without a state change.
    pub fn update(&self) {
        self.app.update();
    }

    /// Resolve a registered component; a missing key is a logged error
    /// rendered as an empty view.
    pub fn component(&self, path: &str) -> View {
        let component = { self.app.inner.borrow().registry.component(path) };
        match component {
            Some(component) => component.resolve(self),
            None => {
                error!("Luminosity: {}", Error::missing_component(path));
                View::empty()
            }
        }
    }

    /// Id of the element error pages render the error detail into.
    pub fn error_info_element(&self) -> String {
        self.app.config().main.on_error.info_element
    }
}
