//! Configuration loading and validation
//!
//! The shell consumes a `config.json` document. Deserialization is
//! tolerant (every field optional); `RawConfig::check` enforces the
//! required shape, logging the missing field and halting initialization
//! instead of raising.

mod loader;
mod types;

pub use loader::load_config;
pub use types::{Config, MainConfig, OnErrorConfig, RawConfig, RawMain, RawOnError};
