//! Luminosity - a minimal client-side-style UI framework
//!
//! The library surface re-exports the workspace crates; [`demo`] holds
//! the demo application the binary and the end-to-end tests run.

pub mod demo;

pub use {luminosity_app, luminosity_core, luminosity_purity};
