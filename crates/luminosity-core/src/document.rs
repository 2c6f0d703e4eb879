//! The live document: head metadata, the mounted body tree, and every
//! mutating operation the patch engine is allowed to perform.
//!
//! Each mutation is recorded in a journal so callers (and tests) can
//! verify exactly which regions a rerender touched.

use tracing::debug;

use crate::dom::{escape_attr, escape_text, Element, EventHandler, Node};
use crate::events::EventKind;

/// A recorded DOM mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The mount point (or a previous mount) was replaced wholesale.
    ReplacedRoot { id: String },
    /// An element's attribute set was cleared and reapplied.
    SetAttributes { id: String },
    /// An element's inner content was replaced.
    SetInnerContent { id: String },
}

/// An in-memory stand-in for the browser document.
///
/// Holds the head state the shell manages (title, metadata, favicon, the
/// dedicated style element, root css custom properties) and the body tree
/// the mount/patch engine operates on.
#[derive(Debug, Default)]
pub struct Document {
    title: String,
    metas: Vec<(String, String)>,
    favicon: Option<String>,
    style: String,
    css_vars: Vec<(String, String)>,
    body: Element,
    journal: Vec<Mutation>,
}

impl Document {
    pub fn new() -> Document {
        Document {
            body: Element::new("body"),
            ..Document::default()
        }
    }

    /// A document whose body contains a single empty element with the
    /// given id, ready for the first mount to replace.
    pub fn with_mount_point(id: impl Into<String>) -> Document {
        let mut doc = Document::new();
        let mut mount = Element::new("div");
        mount.set_attr("id", id);
        doc.body.children.push(mount.into());
        doc
    }

    // ─────────────────────────────────────────────────────────────
    // Head state
    // ─────────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Create or update a `<meta name=.. content=..>` entry.
    pub fn set_meta(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        match self.metas.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = content,
            None => self.metas.push((name, content)),
        }
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn set_favicon(&mut self, href: impl Into<String>) {
        self.favicon = Some(href.into());
    }

    /// Content of the dedicated style element the shell owns.
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn set_style(&mut self, css: impl Into<String>) {
        self.style = css.into();
    }

    pub fn css_var(&self, name: &str) -> Option<&str> {
        self.css_vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a css custom property on the document root.
    pub fn set_css_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.css_vars.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.css_vars.push((name, value)),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Body queries
    // ─────────────────────────────────────────────────────────────

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body
            .children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find_by_id(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body
            .children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.find_by_id_mut(id))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    /// Find the element carrying the given attribute name anywhere in
    /// the body. Used by the event binder to resolve marker attributes.
    pub fn element_by_attr_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.body
            .children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.find_by_attr_mut(name))
    }

    // ─────────────────────────────────────────────────────────────
    // Mutations (journaled)
    // ─────────────────────────────────────────────────────────────

    /// Replace the element with the given id by a fresh node, wholesale.
    /// Returns false when no element carries that id.
    pub fn replace_by_id(&mut self, id: &str, node: Node) -> bool {
        if replace_in_children(&mut self.body.children, id, node).is_ok() {
            debug!(%id, "replaced root element");
            self.journal.push(Mutation::ReplacedRoot { id: id.to_string() });
            true
        } else {
            false
        }
    }

    /// Clear and reapply an element's attribute set from `source`.
    pub fn set_attributes(&mut self, id: &str, source: &Element) -> bool {
        match self.element_by_id_mut(id) {
            Some(el) => {
                el.set_attrs_from(source);
                self.journal.push(Mutation::SetAttributes { id: id.to_string() });
                true
            }
            None => false,
        }
    }

    /// Replace an element's inner content with new children.
    pub fn set_inner_content(&mut self, id: &str, children: Vec<Node>) -> bool {
        match self.element_by_id_mut(id) {
            Some(el) => {
                el.children = children;
                self.journal
                    .push(Mutation::SetInnerContent { id: id.to_string() });
                true
            }
            None => false,
        }
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    // ─────────────────────────────────────────────────────────────
    // Event dispatch
    // ─────────────────────────────────────────────────────────────

    /// Collect the handlers that would fire for an event of `kind` on the
    /// element with `target_id`, in bubbling order (target first, then
    /// each ancestor up to the body).
    pub fn handlers_for(&self, target_id: &str, kind: EventKind) -> Vec<EventHandler> {
        let mut chain = Vec::new();
        collect_bubble_chain(&self.body, target_id, kind, &mut chain);
        chain
    }

    // ─────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────

    /// Serialize the whole document, head state included.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html><html");
        if !self.css_vars.is_empty() {
            out.push_str(" style=\"");
            for (name, value) in &self.css_vars {
                out.push_str(name);
                out.push_str(": ");
                out.push_str(&escape_attr(value));
                out.push(';');
            }
            out.push('"');
        }
        out.push_str("><head><title>");
        out.push_str(&escape_text(&self.title));
        out.push_str("</title>");
        for (name, content) in &self.metas {
            out.push_str("<meta name=\"");
            out.push_str(&escape_attr(name));
            out.push_str("\" content=\"");
            out.push_str(&escape_attr(content));
            out.push_str("\">");
        }
        if let Some(favicon) = &self.favicon {
            out.push_str("<link rel=\"icon\" href=\"");
            out.push_str(&escape_attr(favicon));
            out.push_str("\">");
        }
        out.push_str("<style id=\"luminosity-style\">");
        out.push_str(&self.style);
        out.push_str("</style></head>");
        self.body.write_html(&mut out);
        out.push_str("</html>");
        out
    }

    /// Serialized body content only.
    pub fn body_html(&self) -> String {
        self.body.inner_html()
    }
}

/// Depth-first search for the element with `id`; replaces the node slot
/// holding it. Returns the replacement node when no slot matched so the
/// caller keeps ownership.
fn replace_in_children(children: &mut [Node], id: &str, node: Node) -> Result<(), Node> {
    let mut node = node;
    for child in children.iter_mut() {
        let Some(el) = child.as_element_mut() else {
            continue;
        };
        if el.id() == Some(id) {
            *child = node;
            return Ok(());
        }
        match replace_in_children(&mut el.children, id, node) {
            Ok(()) => return Ok(()),
            Err(returned) => node = returned,
        }
    }
    Err(node)
}

fn collect_bubble_chain(
    el: &Element,
    target_id: &str,
    kind: EventKind,
    out: &mut Vec<EventHandler>,
) -> bool {
    if el.id() == Some(target_id) {
        if let Some(handler) = el.handlers.get(kind) {
            out.push(handler.clone());
        }
        return true;
    }
    for child in el.children.iter().filter_map(Node::as_element) {
        if collect_bubble_chain(child, target_id, kind, out) {
            if let Some(handler) = el.handlers.get(kind) {
                out.push(handler.clone());
            }
            return true;
        }
    }
    false
}
