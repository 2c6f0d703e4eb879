//! The demo pages

use serde_json::json;

use luminosity_app::{Page, PageContext, StateMap};
use luminosity_core::error::Result;
use luminosity_core::events::EventKind;
use luminosity_purity::{el, View};

/// Home: a counter wired through `set_state`, framed by the header and
/// footer components.
pub struct HomePage;

impl Page for HomePage {
    fn title(&self, _ctx: &PageContext) -> Option<String> {
        Some("Home".to_string())
    }

    fn style(&self, _ctx: &PageContext) -> Result<String> {
        Ok("\
#counter { font-size: 2em; color: var(--accent); }
button { padding: 0.5em 1em; }
"
        .to_string())
    }

    fn render(&self, ctx: &PageContext) -> Result<View> {
        let count = ctx.get("count").and_then(|v| v.as_i64()).unwrap_or(0);
        let ctx_inc = ctx.clone();
        let ctx_reset = ctx.clone();
        Ok(el("div")
            .id("root")
            .child(ctx.component("header.js").root)
            .child(el("p").id("counter").text(count))
            .child(
                el("button")
                    .id("increment")
                    .text("+1")
                    .on(EventKind::Click, move |_| {
                        let count = ctx_inc.get("count").and_then(|v| v.as_i64()).unwrap_or(0);
                        let mut patch = StateMap::new();
                        patch.insert("count".to_string(), json!(count + 1));
                        ctx_inc.set_state(patch);
                    }),
            )
            .child(
                el("button")
                    .id("reset")
                    .text("Reset")
                    .on(EventKind::Click, move |_| {
                        let mut patch = StateMap::new();
                        patch.insert("count".to_string(), json!(0));
                        ctx_reset.set_state(patch);
                    }),
            )
            .child(ctx.component("footer.js").root)
            .into())
    }
}

/// Shown while the shell initializes the registered pages.
pub struct LoadingPage;

impl Page for LoadingPage {
    fn render(&self, _ctx: &PageContext) -> Result<View> {
        Ok(el("div")
            .id("root")
            .child(el("p").text("Loading..."))
            .into())
    }
}

/// Fallback for unresolvable routes.
pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn title(&self, _ctx: &PageContext) -> Option<String> {
        Some("Error".to_string())
    }

    fn render(&self, _ctx: &PageContext) -> Result<View> {
        Ok(el("div")
            .id("root")
            .child(el("h1").text("404"))
            .child(el("p").text("Page not found"))
            .child(el("a").attr("href", "/").text("Go to home"))
            .into())
    }
}

/// Shown when the error channel fires; renders the error detail into
/// the configured info element.
pub struct ErrorPage;

impl Page for ErrorPage {
    fn title(&self, _ctx: &PageContext) -> Option<String> {
        Some("Error".to_string())
    }

    fn render(&self, ctx: &PageContext) -> Result<View> {
        let detail = ctx
            .get("error")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        Ok(el("div")
            .id("root")
            .child(el("h1").text("Something went wrong"))
            .child(el("p").id(ctx.error_info_element()).text(detail))
            .into())
    }
}
