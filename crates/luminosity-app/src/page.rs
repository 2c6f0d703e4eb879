//! Page and component contracts
//!
//! A page is the unit of navigation: the shell calls `title`, `init`,
//! `style`, `render`, and `on_event` at the points of the lifecycle the
//! module docs on [`crate::shell`] describe. The trait makes the
//! capability set a compile-time contract instead of a runtime export
//! check; only `render` is mandatory.

use std::rc::Rc;

use luminosity_core::dom::Node;
use luminosity_core::error::Result;
use luminosity_core::events::DomEvent;
use luminosity_purity::View;

use crate::shell::PageContext;

/// A page descriptor.
pub trait Page {
    /// Document title while this page is current; `None` keeps the
    /// configured title.
    fn title(&self, _ctx: &PageContext) -> Option<String> {
        None
    }

    /// Called once when the page is registered with the shell.
    fn init(&self, _ctx: &PageContext) {}

    /// CSS injected into the dedicated style element while this page is
    /// current. Errors are contained the same way `render` errors are.
    fn style(&self, _ctx: &PageContext) -> Result<String> {
        Ok(String::new())
    }

    /// Produce the page's view. Must be synchronous; errors are caught
    /// by the shell and replaced with a fallback fragment.
    fn render(&self, ctx: &PageContext) -> Result<View>;

    /// Receives every listened DOM event while this page is current.
    fn on_event(&self, _event: &DomEvent, _ctx: &PageContext) {}
}

/// A component: either a static view value or a callable resolved at
/// render time.
#[derive(Clone)]
pub enum Component {
    Value(Node),
    Dynamic(Rc<dyn Fn(&PageContext) -> View>),
}

impl Component {
    pub fn value(node: impl Into<Node>) -> Component {
        Component::Value(node.into())
    }

    pub fn dynamic(f: impl Fn(&PageContext) -> View + 'static) -> Component {
        Component::Dynamic(Rc::new(f))
    }

    pub fn resolve(&self, ctx: &PageContext) -> View {
        match self {
            Component::Value(node) => View::new(node.clone()),
            Component::Dynamic(f) => f(ctx),
        }
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Value(_) => f.write_str("Component::Value"),
            Component::Dynamic(_) => f.write_str("Component::Dynamic"),
        }
    }
}
