//! Typed view builder
//!
//! Pages construct their markup programmatically instead of through
//! string templates. Interpolated values keep the template semantics:
//! null and `false` render as the empty string, lists concatenate with no
//! separator, everything else renders through its display form. Building
//! the same tree twice yields byte-identical HTML.

use std::rc::Rc;

use luminosity_core::dom::{Element, Node};
use luminosity_core::events::{DomEvent, EventKind};

/// An interpolated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// True unless the value is null or `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// The rendered string form: falsy values disappear, lists
    /// concatenate without a separator.
    pub fn render(&self) -> String {
        match self {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => "true".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::List(items) => items.iter().map(Value::render).collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Float(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// A rendered view: one root node ready for the mount/patch engine.
#[derive(Debug, Clone)]
pub struct View {
    pub root: Node,
}

impl View {
    pub fn new(root: impl Into<Node>) -> View {
        View { root: root.into() }
    }

    pub fn empty() -> View {
        View {
            root: Node::Text(String::new()),
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl From<ElementBuilder> for View {
    fn from(builder: ElementBuilder) -> View {
        View {
            root: builder.build().into(),
        }
    }
}

/// Start building an element.
pub fn el(tag: impl Into<String>) -> ElementBuilder {
    ElementBuilder {
        element: Element::new(tag),
    }
}

/// A text node from any interpolatable value.
pub fn text(value: impl Into<Value>) -> Node {
    Node::Text(value.into().render())
}

/// Fluent element construction.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.set_attr("id", id);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.set_attr("class", class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.element.set_attr(name, value.into().render());
        self
    }

    /// Attach an event handler; the engine binds it after DOM insertion.
    pub fn on(mut self, kind: EventKind, handler: impl Fn(&DomEvent) + 'static) -> Self {
        self.element.handlers.set(kind, Rc::new(handler));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.element.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.element
            .children
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// A text child from any interpolatable value.
    pub fn text(mut self, value: impl Into<Value>) -> Self {
        self.element.children.push(text(value));
        self
    }

    pub fn build(self) -> Element {
        self.element
    }
}

impl From<ElementBuilder> for Node {
    fn from(builder: ElementBuilder) -> Node {
        Node::Element(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            el("div")
                .id("root")
                .child(el("p").text("hi"))
                .build()
                .to_html()
        };
        assert_eq!(build(), build());
        assert_eq!(build(), "<div id=\"root\"><p>hi</p></div>");
    }

    #[test]
    fn test_falsy_values_render_empty() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Bool(false).render(), "");
        assert_eq!(Value::from(None::<&str>).render(), "");
        assert_eq!(text(false).to_html(), "");
    }

    #[test]
    fn test_list_values_concatenate_without_separator() {
        let items = vec!["a", "b", "c"];
        assert_eq!(Value::from(items).render(), "abc");

        let mixed = Value::List(vec![Value::Int(1), Value::Null, Value::Text("x".into())]);
        assert_eq!(mixed.render(), "1x");
    }

    #[test]
    fn test_truthy_values_coerce_to_strings() {
        assert_eq!(Value::from(7).render(), "7");
        assert_eq!(Value::from(true).render(), "true");
        assert_eq!(Value::from(1.5).render(), "1.5");
    }

    #[test]
    fn test_attr_accepts_values() {
        let html = el("a").attr("href", Some("/home")).build().to_html();
        assert_eq!(html, "<a href=\"/home\"></a>");

        let html = el("a").attr("hidden", false).build().to_html();
        assert_eq!(html, "<a hidden></a>");
    }

    #[test]
    fn test_children_iterator() {
        let html = el("ul")
            .children((0..3).map(|i| el("li").text(i)))
            .build()
            .to_html();
        assert_eq!(html, "<ul><li>0</li><li>1</li><li>2</li></ul>");
    }
}
