//! # luminosity-purity - The Renderer
//!
//! Purity renders typed view trees into the live document and keeps them
//! up to date with the smallest shallow-diff that the id-region model
//! allows:
//!
//! 1. A page builds a [`View`] with the fluent [`el`]/[`text`] builder.
//! 2. [`Purity::prepare`] lifts event handlers into a marker-keyed
//!    binding list and builds the [`ShadowMap`] of id-regions with their
//!    comparison keys.
//! 3. [`Purity::mount`] replaces the designated root element;
//!    [`Purity::rerender`] patches only the regions whose shallow key
//!    changed, reapplying attributes always and inner content only when
//!    the inner key differs.
//! 4. Bindings are applied right after insertion; stale markers no-op.
//!
//! A single id-region is the atomic patch unit: any change inside it
//! replaces that region's whole inner content. There is no keyed list
//! diffing and no reconciliation inside a region.

pub mod bindings;
pub mod builder;
pub mod engine;
pub mod shadow;

pub use bindings::{Binding, BindingAllocator, BINDING_PREFIX};
pub use builder::{el, text, ElementBuilder, Value, View};
pub use engine::{Purity, RenderOutput};
pub use shadow::{ShadowEntry, ShadowMap};
