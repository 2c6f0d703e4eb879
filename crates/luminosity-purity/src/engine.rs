//! Mount/patch engine
//!
//! Owns the current shadow map. On mount, the first id of the render
//! output designates the root: the live element with that id is replaced
//! wholesale. On rerender, every previously tracked id is compared by its
//! shallow key; unchanged regions are skipped without touching the DOM,
//! changed regions get their attribute set reapplied and, when the inner
//! key also differs, their inner content replaced. Event bindings are
//! applied right after insertion in both paths.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use luminosity_core::document::Document;
use luminosity_core::dom::Node;
use luminosity_core::error::{Error, Result};

use crate::bindings::{apply_bindings, extract_bindings, Binding, BindingAllocator};
use crate::builder::View;
use crate::shadow::ShadowMap;

/// A prepared render pass: shadow map plus the bindings lifted from the
/// tree.
#[derive(Debug)]
pub struct RenderOutput {
    pub shadow: ShadowMap,
    pub bindings: Vec<Binding>,
}

/// The renderer: shadow-map owner and DOM patcher.
pub struct Purity {
    document: Rc<RefCell<Document>>,
    current: Option<ShadowMap>,
    allocator: BindingAllocator,
}

impl Purity {
    pub fn new(document: Rc<RefCell<Document>>) -> Purity {
        Purity {
            document,
            current: None,
            allocator: BindingAllocator::new(),
        }
    }

    pub fn document(&self) -> Rc<RefCell<Document>> {
        self.document.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Turn a view into a render output: allocate a fresh binding
    /// generation, lift handlers out of the tree, build the shadow map.
    pub fn prepare(&mut self, view: View) -> RenderOutput {
        self.allocator.begin_pass();
        let mut root: Node = view.root;
        let bindings = extract_bindings(&mut root, &mut self.allocator);
        let shadow = ShadowMap::build(&root);
        RenderOutput { shadow, bindings }
    }

    /// Replace the designated root element in the document with this
    /// pass's root node and record the shadow map as current.
    pub fn mount(&mut self, output: RenderOutput) -> Result<()> {
        let root_id = output
            .shadow
            .first_id()
            .ok_or(Error::EmptyRender)?
            .to_string();
        let root_node = output
            .shadow
            .get(&root_id)
            .map(|entry| entry.node.clone())
            .ok_or(Error::EmptyRender)?;

        {
            let mut doc = self.document.borrow_mut();
            if !doc.replace_by_id(&root_id, Node::Element(root_node)) {
                return Err(Error::root_id_mismatch(root_id));
            }
        }

        self.current = Some(output.shadow);
        self.bind(output.bindings);
        Ok(())
    }

    /// Patch the document against the previous shadow map.
    ///
    /// Only ids that existed in the previous map are examined; ids absent
    /// from the new map are skipped (no removal logic). A tracked id
    /// missing from the live document aborts the pass.
    pub fn rerender(&mut self, output: RenderOutput) -> Result<()> {
        let Some(previous) = self.current.as_ref() else {
            // First render goes through the mount path.
            return self.mount(output);
        };

        debug!("rerender pass");
        for (id, old) in previous.iter() {
            let Some(new) = output.shadow.get(id) else {
                continue;
            };
            if old.key == new.key {
                continue;
            }
            let mut doc = self.document.borrow_mut();
            if !doc.contains_id(id) {
                // Keep the previous map; this pass is aborted.
                return Err(Error::element_vanished(id));
            }
            doc.set_attributes(id, &new.node);
            if old.inner_key != new.inner_key {
                doc.set_inner_content(id, new.node.children.clone());
                debug!(%id, "replaced inner content");
            } else {
                debug!(%id, "updated attributes");
            }
        }

        // Ids new in this pass reach the document through the nearest
        // changed ancestor's inner-content replacement. Anything still
        // unresolved is tracked but dangling.
        {
            let doc = self.document.borrow();
            for id in output.shadow.ids() {
                if !previous.contains(id) && !doc.contains_id(id) {
                    warn!(%id, "newly rendered region is not present in the document");
                }
            }
        }

        self.current = Some(output.shadow);
        self.bind(output.bindings);
        Ok(())
    }

    fn bind(&mut self, bindings: Vec<Binding>) {
        let mut doc = self.document.borrow_mut();
        apply_bindings(&mut doc, bindings);
    }
}
