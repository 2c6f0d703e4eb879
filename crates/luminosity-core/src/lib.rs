//! # luminosity-core - Core DOM Model and Domain Types
//!
//! Foundation crate for Luminosity. Provides the in-memory DOM tree, the
//! live document, the DOM event surface, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### DOM (`dom`)
//! - [`Node`] - A tree node (element, text, or comment)
//! - [`Element`] - Tag, insertion-ordered attributes, children, handlers
//! - [`EventHandler`] - A shared closure attached to a live element
//!
//! ### Document (`document`)
//! - [`Document`] - Live document: head metadata, body tree, id lookup
//! - [`Mutation`] - Journal entry recording what a patch touched
//!
//! ### Events (`events`)
//! - [`EventKind`] - The twelve DOM event types the shell listens for
//! - [`DomEvent`] - A dispatched event with optional target and payload
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use luminosity_core::prelude::*;
//! ```

pub mod document;
pub mod dom;
pub mod error;
pub mod events;
pub mod logging;

/// Prelude for common imports used throughout all Luminosity crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use document::{Document, Mutation};
pub use dom::{escape_attr, escape_text, Element, EventHandler, HandlerMap, Node};
pub use error::{Error, Result};
pub use events::{DomEvent, EventKind};
