//! Post-mount event binding
//!
//! Handlers attached through the builder are lifted out of the tree
//! before shadow construction: each handler-bearing element gets a unique
//! marker attribute and an entry in the binding list. Right after DOM
//! insertion the engine resolves each marker in the live document,
//! attaches the handler, and strips the marker. A marker that no longer
//! resolves (the region was never mounted, or was replaced in the
//! meantime) is a silent no-op.

use tracing::trace;

use luminosity_core::document::Document;
use luminosity_core::dom::{Element, EventHandler, Node};
use luminosity_core::events::EventKind;

/// Marker attribute prefix. Attributes with this prefix never take part
/// in shallow comparison.
pub const BINDING_PREFIX: &str = "data-purity-b";

/// True for attribute names the binder owns.
pub fn is_binding_attr(name: &str) -> bool {
    name.starts_with(BINDING_PREFIX)
}

/// One deferred handler attachment.
pub struct Binding {
    pub marker: String,
    pub kind: EventKind,
    pub handler: EventHandler,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("marker", &self.marker)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Allocates unique marker names across render passes.
///
/// The generation increases once per mount/rerender pass, so markers from
/// an earlier pass can never collide with the current one. This replaces
/// the original's debounced counter reset with explicit semantics.
#[derive(Debug, Default)]
pub struct BindingAllocator {
    generation: u64,
    seq: u64,
}

impl BindingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new render pass.
    pub fn begin_pass(&mut self) {
        self.generation += 1;
        self.seq = 0;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn next_marker(&mut self) -> String {
        let marker = format!("{BINDING_PREFIX}{}-{}", self.generation, self.seq);
        self.seq += 1;
        marker
    }
}

/// Lift handlers out of the tree into a binding list, tagging each
/// handler-bearing element with a fresh marker attribute.
pub fn extract_bindings(root: &mut Node, alloc: &mut BindingAllocator) -> Vec<Binding> {
    let mut bindings = Vec::new();
    if let Some(el) = root.as_element_mut() {
        extract_from_element(el, alloc, &mut bindings);
    }
    bindings
}

fn extract_from_element(el: &mut Element, alloc: &mut BindingAllocator, out: &mut Vec<Binding>) {
    if !el.handlers.is_empty() {
        for (kind, handler) in el.handlers.take() {
            let marker = alloc.next_marker();
            el.set_attr(marker.clone(), "");
            out.push(Binding {
                marker,
                kind,
                handler,
            });
        }
    }
    for child in el.children.iter_mut().filter_map(Node::as_element_mut) {
        extract_from_element(child, alloc, out);
    }
}

/// Resolve every binding against the live document: attach the handler
/// and strip the marker, or no-op when the marker is gone.
pub fn apply_bindings(document: &mut Document, bindings: Vec<Binding>) {
    for binding in bindings {
        match document.element_by_attr_mut(&binding.marker) {
            Some(el) => {
                el.remove_attr(&binding.marker);
                el.handlers.set(binding.kind, binding.handler);
            }
            None => {
                // Stale reference, not an error: the element was never
                // mounted or a later pass already replaced it.
                trace!(marker = %binding.marker, "binding target not in document, skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::el;
    use luminosity_core::events::DomEvent;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_markers_are_unique_across_passes() {
        let mut alloc = BindingAllocator::new();
        alloc.begin_pass();
        let a = alloc.next_marker();
        let b = alloc.next_marker();
        alloc.begin_pass();
        let c = alloc.next_marker();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "data-purity-b1-0");
        assert_eq!(c, "data-purity-b2-0");
    }

    #[test]
    fn test_extract_moves_handlers_into_markers() {
        let mut alloc = BindingAllocator::new();
        alloc.begin_pass();
        let mut root: Node = el("div")
            .id("root")
            .child(el("button").on(EventKind::Click, |_| {}))
            .into();

        let bindings = extract_bindings(&mut root, &mut alloc);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].kind, EventKind::Click);

        let button = root.as_element().unwrap().children[0].as_element().unwrap();
        assert!(button.handlers.is_empty());
        assert!(button.attr(&bindings[0].marker).is_some());
        assert!(is_binding_attr(&bindings[0].marker));
    }

    #[test]
    fn test_apply_attaches_and_strips_marker() {
        let mut alloc = BindingAllocator::new();
        alloc.begin_pass();
        let hits = Rc::new(Cell::new(0));
        let hits2 = hits.clone();
        let mut root: Node = el("div")
            .id("root")
            .child(
                el("button")
                    .id("inc")
                    .on(EventKind::Click, move |_| hits2.set(hits2.get() + 1)),
            )
            .into();
        let bindings = extract_bindings(&mut root, &mut alloc);

        let mut doc = Document::with_mount_point("root");
        assert!(doc.replace_by_id("root", root));
        apply_bindings(&mut doc, bindings);

        let button = doc.element_by_id("inc").unwrap();
        assert_eq!(button.handlers.len(), 1);
        // Marker attribute must be gone from the final DOM.
        assert!(!button.attrs().any(|(name, _)| is_binding_attr(name)));

        let event = DomEvent::with_target(EventKind::Click, "inc");
        for handler in doc.handlers_for("inc", EventKind::Click) {
            handler(&event);
        }
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_stale_binding_is_silent_noop() {
        let mut alloc = BindingAllocator::new();
        alloc.begin_pass();
        let mut root: Node = el("div")
            .id("root")
            .child(el("button").on(EventKind::Click, |_| {}))
            .into();
        let bindings = extract_bindings(&mut root, &mut alloc);

        // The rendered tree is never inserted; the document stays empty.
        let mut doc = Document::with_mount_point("root");
        apply_bindings(&mut doc, bindings);
        assert!(doc.element_by_id("root").unwrap().handlers.is_empty());
    }
}
