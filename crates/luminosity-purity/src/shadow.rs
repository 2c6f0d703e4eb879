//! Shadow map construction
//!
//! A render pass produces one [`ShadowMap`]: every id-bearing element in
//! the tree, in document (preorder) order, paired with its shallow
//! comparison keys. A key is the element's serialized form with two
//! normalizations: nested id-bearing elements collapse to a stable
//! `<!-- TAG#id -->` placeholder (so outer diffs ignore inner subtree
//! changes), and binder-marker attributes are skipped (so fresh markers
//! never make an unchanged region look changed). The keys are computed in
//! a single walk; no parallel DOM tree is built.

use luminosity_core::dom::{escape_attr, escape_text, Element, Node};

use crate::bindings::is_binding_attr;

/// One tracked id-region.
#[derive(Debug, Clone)]
pub struct ShadowEntry {
    /// The live-candidate element produced by this render pass.
    pub node: Element,
    /// Shallow serialization of the whole element (tag, attributes,
    /// inner content).
    pub key: String,
    /// Shallow serialization of the inner content only.
    pub inner_key: String,
}

/// Insertion-ordered map from element id to [`ShadowEntry`].
///
/// Replaced wholesale on every render pass, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ShadowMap {
    entries: Vec<(String, ShadowEntry)>,
}

impl ShadowMap {
    /// Walk the rendered tree and collect every id-bearing element.
    pub fn build(root: &Node) -> ShadowMap {
        let mut map = ShadowMap::default();
        if let Some(el) = root.as_element() {
            collect(el, &mut map);
        }
        map
    }

    pub fn get(&self, id: &str) -> Option<&ShadowEntry> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The first id in document order: the root id by convention.
    pub fn first_id(&self) -> Option<&str> {
        self.entries.first().map(|(id, _)| id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShadowEntry)> {
        self.entries
            .iter()
            .map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect(el: &Element, map: &mut ShadowMap) {
    if let Some(id) = el.id() {
        let inner_key = shallow_inner(el);
        let mut key = String::new();
        write_open_tag(el, &mut key);
        if !el.is_void() {
            key.push_str(&inner_key);
            key.push_str("</");
            key.push_str(el.tag());
            key.push('>');
        }
        map.entries.push((
            id.to_string(),
            ShadowEntry {
                node: el.clone(),
                key,
                inner_key,
            },
        ));
    }
    for child in el.children.iter().filter_map(Node::as_element) {
        collect(child, map);
    }
}

fn shallow_inner(el: &Element) -> String {
    let mut out = String::new();
    for child in &el.children {
        write_shallow_node(child, &mut out);
    }
    out
}

fn write_shallow_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => {
            if let Some(id) = el.id() {
                // Stable placeholder; the nested region diffs on its own.
                out.push_str("<!-- ");
                out.push_str(&el.tag().to_ascii_uppercase());
                out.push('#');
                out.push_str(id);
                out.push_str(" -->");
                return;
            }
            write_open_tag(el, out);
            if el.is_void() {
                return;
            }
            for child in &el.children {
                write_shallow_node(child, out);
            }
            out.push_str("</");
            out.push_str(el.tag());
            out.push('>');
        }
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

fn write_open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        if is_binding_attr(name) {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{extract_bindings, BindingAllocator};
    use crate::builder::el;
    use luminosity_core::events::EventKind;

    fn nested_tree() -> Node {
        el("div")
            .id("a")
            .child(el("span").id("b").text("x"))
            .into()
    }

    #[test]
    fn test_nested_id_collapses_to_placeholder() {
        let map = ShadowMap::build(&nested_tree());
        let a = map.get("a").unwrap();
        assert_eq!(a.key, "<div id=\"a\"><!-- SPAN#b --></div>");
        assert!(!a.key.contains('x'));
        // The nested region still gets its own entry with real content.
        let b = map.get("b").unwrap();
        assert_eq!(b.key, "<span id=\"b\">x</span>");
    }

    #[test]
    fn test_document_order_and_root_id() {
        let tree: Node = el("div")
            .id("root")
            .child(el("p").id("first"))
            .child(el("p").id("second").child(el("em").id("deep")))
            .into();
        let map = ShadowMap::build(&tree);
        assert_eq!(map.first_id(), Some("root"));
        assert_eq!(
            map.ids().collect::<Vec<_>>(),
            vec!["root", "first", "second", "deep"]
        );
    }

    #[test]
    fn test_no_id_elements_yields_empty_map() {
        let tree: Node = el("div").child(el("p").text("hi")).into();
        let map = ShadowMap::build(&tree);
        assert!(map.is_empty());
        assert_eq!(map.first_id(), None);
    }

    #[test]
    fn test_binding_markers_never_reach_comparison_keys() {
        let mut alloc = BindingAllocator::new();

        let build = |alloc: &mut BindingAllocator| {
            alloc.begin_pass();
            let mut tree: Node = el("div")
                .id("root")
                .child(el("button").on(EventKind::Click, |_| {}))
                .into();
            extract_bindings(&mut tree, alloc);
            ShadowMap::build(&tree)
        };

        let first = build(&mut alloc);
        let second = build(&mut alloc);
        // Markers differ between passes, keys must not.
        assert_eq!(
            first.get("root").unwrap().key,
            second.get("root").unwrap().key
        );
        assert!(!first.get("root").unwrap().key.contains("data-purity"));
        // The live-candidate node keeps its marker for the binder.
        let node_html = first.get("root").unwrap().node.to_html();
        assert!(node_html.contains("data-purity-b"));
    }

    #[test]
    fn test_inner_key_ignores_own_attributes() {
        let v1: Node = el("div").id("a").class("one").text("same").into();
        let v2: Node = el("div").id("a").class("two").text("same").into();
        let m1 = ShadowMap::build(&v1);
        let m2 = ShadowMap::build(&v2);
        assert_ne!(m1.get("a").unwrap().key, m2.get("a").unwrap().key);
        assert_eq!(m1.get("a").unwrap().inner_key, m2.get("a").unwrap().inner_key);
    }
}
