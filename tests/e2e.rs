//! End-to-end scenarios: config through shell startup, routing, event
//! binding, and state-driven rerenders, all against a live document.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde_json::json;

use luminosity::demo;
use luminosity_app::{App, Page, PageContext, RawConfig, StateMap};
use luminosity_core::document::Document;
use luminosity_core::error::Result;
use luminosity_core::events::{DomEvent, EventKind};
use luminosity_purity::{el, View};

fn raw_config() -> RawConfig {
    serde_json::from_value(json!({
        "main": {
            "title": "App",
            "description": "e2e",
            "favicon": "favicon.ico",
            "author": "tests",
            "start_page": "home.js",
            "loading_page": "loading.js",
            "not_found_page": "not_found.js",
            "on_error": { "page": "error.js", "info_element": "error-info" },
            "init_with_states": { "greeting": "hi" }
        },
        "pages": { "home": "home.js" }
    }))
    .unwrap()
}

struct GreetingPage;

impl Page for GreetingPage {
    fn render(&self, ctx: &PageContext) -> Result<View> {
        let greeting = ctx
            .get("greeting")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        Ok(el("div").id("root").child(el("p").text(greeting)).into())
    }
}

struct StaticPage(&'static str);

impl Page for StaticPage {
    fn render(&self, _ctx: &PageContext) -> Result<View> {
        Ok(el("div").id("root").child(el("p").text(self.0)).into())
    }
}

fn shell() -> App {
    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(raw_config(), document).unwrap();
    app.register_page("home.js", Rc::new(GreetingPage));
    app.register_page("loading.js", Rc::new(StaticPage("Loading...")));
    app.register_page("not_found.js", Rc::new(StaticPage("Not found")));
    app.register_page("error.js", Rc::new(StaticPage("Error")));
    app
}

#[test]
fn start_page_renders_state_into_paragraph() {
    let app = shell();
    app.start().unwrap();

    let doc = app.document();
    insta::assert_snapshot!(
        doc.borrow().body_html(),
        @r#"<div id="root"><p>hi</p></div>"#
    );
}

#[test]
fn unregistered_hash_route_renders_not_found() {
    let app = shell();
    app.start().unwrap();

    app.navigate("#/does-not-exist").unwrap();

    assert_eq!(app.current_page().as_deref(), Some("not_found.js"));
    let doc = app.document();
    assert!(doc.borrow().body_html().contains("Not found"));
    // The previous page's content is gone.
    assert!(!doc.borrow().body_html().contains("hi"));
}

#[test]
fn click_binding_fires_exactly_once_and_marker_is_stripped() {
    struct ClickPage(Rc<std::cell::Cell<u32>>);
    impl Page for ClickPage {
        fn render(&self, _ctx: &PageContext) -> Result<View> {
            let hits = self.0.clone();
            Ok(el("div")
                .id("root")
                .child(
                    el("button")
                        .id("go")
                        .on(EventKind::Click, move |_| hits.set(hits.get() + 1)),
                )
                .into())
        }
    }

    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(raw_config(), document).unwrap();
    let hits = Rc::new(std::cell::Cell::new(0));
    app.register_page("home.js", Rc::new(ClickPage(hits.clone())));
    app.register_page("loading.js", Rc::new(StaticPage("Loading...")));
    app.register_page("not_found.js", Rc::new(StaticPage("Not found")));
    app.register_page("error.js", Rc::new(StaticPage("Error")));
    app.start().unwrap();

    let doc = app.document();
    assert!(!doc.borrow().body_html().contains("data-purity"));

    app.dispatch(&DomEvent::with_target(EventKind::Click, "go"));
    assert_eq!(hits.get(), 1);
}

#[test]
fn demo_counter_increments_through_dispatched_clicks() {
    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(demo::sample_config(), document.clone()).unwrap();
    demo::register(&app);
    app.start().unwrap();

    assert_eq!(
        document.borrow().element_by_id("counter").unwrap().inner_html(),
        "0"
    );

    app.dispatch(&DomEvent::with_target(EventKind::Click, "increment"));
    app.dispatch(&DomEvent::with_target(EventKind::Click, "increment"));
    assert_eq!(
        document.borrow().element_by_id("counter").unwrap().inner_html(),
        "2"
    );

    app.dispatch(&DomEvent::with_target(EventKind::Click, "reset"));
    assert_eq!(
        document.borrow().element_by_id("counter").unwrap().inner_html(),
        "0"
    );

    // Components render around the counter.
    let body = document.borrow().body_html();
    assert!(body.contains("<header><p>Header content goes here</p></header>"));
    assert!(body.contains("<footer><p>Footer content goes here</p></footer>"));
}

#[test]
fn config_loaded_from_disk_drives_the_shell() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&raw_config()).unwrap()).unwrap();

    let raw = luminosity_app::load_config(file.path()).unwrap();
    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(raw, document.clone()).unwrap();
    app.register_page("home.js", Rc::new(GreetingPage));
    app.register_page("loading.js", Rc::new(StaticPage("Loading...")));
    app.register_page("not_found.js", Rc::new(StaticPage("Not found")));
    app.register_page("error.js", Rc::new(StaticPage("Error")));
    app.start().unwrap();

    let doc = document.borrow();
    assert_eq!(doc.title(), "App");
    assert!(doc.body_html().contains("<p>hi</p>"));
}

#[test]
fn error_channel_redirects_to_error_page_with_detail() {
    struct InfoErrorPage;
    impl Page for InfoErrorPage {
        fn render(&self, ctx: &PageContext) -> Result<View> {
            let detail = ctx
                .get("error")
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Ok(el("div")
                .id("root")
                .child(el("p").id(ctx.error_info_element()).text(detail))
                .into())
        }
    }

    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(raw_config(), document.clone()).unwrap();
    app.register_page("home.js", Rc::new(GreetingPage));
    app.register_page("loading.js", Rc::new(StaticPage("Loading...")));
    app.register_page("not_found.js", Rc::new(StaticPage("Not found")));
    app.register_page("error.js", Rc::new(InfoErrorPage));
    app.start().unwrap();

    app.report_error("exploded");

    assert_eq!(app.current_page().as_deref(), Some("error.js"));
    assert_eq!(app.state_value("error"), Some(json!("exploded")));
    assert_eq!(
        document.borrow().element_by_id("error-info").unwrap().inner_html(),
        "exploded"
    );
}

#[test]
fn set_state_is_unbatched_full_rerenders() {
    let app = shell();
    app.start().unwrap();

    for greeting in ["one", "two", "three"] {
        let mut patch = StateMap::new();
        patch.insert("greeting".to_string(), json!(greeting));
        app.set_state(patch);
        let doc = app.document();
        assert!(doc.borrow().body_html().contains(greeting));
    }
}
