//! Configuration types for Luminosity
//!
//! Defines:
//! - `RawConfig` - config.json as deserialized, every field optional
//! - `Config` - the checked configuration the shell runs with
//! - Related sub-types

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::collections::BTreeMap;

/// config.json as found on disk. Every field is optional so that
/// validation can report precisely which required field is missing
/// instead of failing on deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawConfig {
    #[serde(default)]
    pub main: Option<RawMain>,

    /// Route key to page module path.
    #[serde(default)]
    pub pages: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMain {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub favicon: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub start_page: Option<String>,

    #[serde(default)]
    pub loading_page: Option<String>,

    #[serde(default)]
    pub not_found_page: Option<String>,

    #[serde(default)]
    pub on_error: Option<RawOnError>,

    /// CSS custom properties applied to the document root.
    #[serde(default)]
    pub global_css: Option<BTreeMap<String, String>>,

    /// Initial application state.
    #[serde(default)]
    pub init_with_states: Option<Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawOnError {
    #[serde(default)]
    pub page: Option<String>,

    /// Id of the element error pages render the error detail into.
    #[serde(default)]
    pub info_element: Option<String>,
}

/// The checked configuration: every required field present.
#[derive(Debug, Clone)]
pub struct Config {
    pub main: MainConfig,
    pub pages: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MainConfig {
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub author: String,
    pub start_page: String,
    pub loading_page: String,
    pub not_found_page: String,
    pub on_error: OnErrorConfig,
    pub global_css: BTreeMap<String, String>,
    pub init_with_states: Map<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct OnErrorConfig {
    pub page: String,
    pub info_element: String,
}
