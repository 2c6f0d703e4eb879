//! Demo application: the pages and components the binary (and the
//! end-to-end tests) run against.

mod pages;

use std::rc::Rc;

use luminosity_app::{App, Component, RawConfig};
use luminosity_purity::el;

pub use pages::{ErrorPage, HomePage, LoadingPage, NotFoundPage};

/// The built-in configuration used when no config file is given.
pub fn sample_config() -> RawConfig {
    serde_json::from_value(serde_json::json!({
        "main": {
            "title": "Luminosity Demo",
            "description": "A demo app built with Luminosity",
            "favicon": "favicon.ico",
            "author": "Luminosity",
            "start_page": "home.js",
            "loading_page": "loading.js",
            "not_found_page": "not_found.js",
            "on_error": { "page": "error.js", "info_element": "error-info" },
            "global_css": { "--accent": "#6b5bd2" },
            "init_with_states": { "count": 0 }
        },
        "pages": { "home": "home.js" }
    }))
    .expect("built-in config is valid JSON")
}

/// Register the demo pages and components with the shell.
pub fn register(app: &App) {
    app.register_page("home.js", Rc::new(HomePage));
    app.register_page("loading.js", Rc::new(LoadingPage));
    app.register_page("not_found.js", Rc::new(NotFoundPage));
    app.register_page("error.js", Rc::new(ErrorPage));

    app.register_component(
        "header.js",
        Component::value(el("header").child(el("p").text("Header content goes here"))),
    );
    app.register_component(
        "footer.js",
        Component::value(el("footer").child(el("p").text("Footer content goes here"))),
    );
}
