//! Loading and checking config.json

use std::path::Path;

use luminosity_core::prelude::*;

use super::types::{Config, MainConfig, OnErrorConfig, RawConfig};

/// Load the raw configuration document from disk.
pub fn load_config(path: &Path) -> Result<RawConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    debug!("Loaded config from {:?}", path);
    Ok(config)
}

impl RawConfig {
    /// Validate required fields.
    ///
    /// Logs the first missing field through the error channel and returns
    /// `None`; initialization must halt in that case. Optional sections
    /// (`global_css`, `init_with_states`) default to empty.
    pub fn check(self) -> Option<Config> {
        macro_rules! require {
            ($value:expr, $what:literal) => {
                match $value {
                    Some(value) => value,
                    None => {
                        error!(concat!("Luminosity: Missing ", $what, " in config"));
                        return None;
                    }
                }
            };
        }

        let main = require!(self.main, "main");
        let title = require!(main.title, "title");
        let description = require!(main.description, "description");
        let favicon = require!(main.favicon, "favicon");
        let author = require!(main.author, "author");
        let start_page = require!(main.start_page, "start_page");
        let loading_page = require!(main.loading_page, "loading_page");
        let not_found_page = require!(main.not_found_page, "not_found_page");
        let on_error = require!(main.on_error, "on_error");
        let error_page = require!(on_error.page, "page in on_error");
        let info_element = require!(on_error.info_element, "info_element in on_error");
        let pages = require!(self.pages, "pages");

        info!("Luminosity: Config loaded");

        Some(Config {
            main: MainConfig {
                title,
                description,
                favicon,
                author,
                start_page,
                loading_page,
                not_found_page,
                on_error: OnErrorConfig {
                    page: error_page,
                    info_element,
                },
                global_css: main.global_css.unwrap_or_default(),
                init_with_states: main.init_with_states.unwrap_or_default(),
            },
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "main": {
                "title": "Demo",
                "description": "A demo app",
                "favicon": "favicon.ico",
                "author": "someone",
                "start_page": "home.js",
                "loading_page": "loading.js",
                "not_found_page": "not_found.js",
                "on_error": { "page": "error.js", "info_element": "error-info" },
                "global_css": { "--accent": "#f00" }
            },
            "pages": { "home": "home.js" }
        })
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", sample_json()).unwrap();

        let raw = load_config(file.path()).unwrap();
        let config = raw.check().unwrap();
        assert_eq!(config.main.title, "Demo");
        assert_eq!(config.main.on_error.info_element, "error-info");
        assert_eq!(config.pages["home"], "home.js");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_config_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_check_halts_on_missing_required_field() {
        let mut value = sample_json();
        value["main"].as_object_mut().unwrap().remove("title");
        let raw: RawConfig = serde_json::from_value(value).unwrap();
        assert!(raw.check().is_none());
    }

    #[test]
    fn test_check_halts_on_missing_on_error_page() {
        let mut value = sample_json();
        value["main"]["on_error"]
            .as_object_mut()
            .unwrap()
            .remove("page");
        let raw: RawConfig = serde_json::from_value(value).unwrap();
        assert!(raw.check().is_none());
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let mut value = sample_json();
        value["main"].as_object_mut().unwrap().remove("global_css");
        let raw: RawConfig = serde_json::from_value(value).unwrap();
        let config = raw.check().unwrap();
        assert!(config.main.global_css.is_empty());
        assert!(config.main.init_with_states.is_empty());
    }
}
