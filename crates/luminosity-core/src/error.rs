//! Application error types with fatal/recoverable classification

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Mount/Patch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Root DOM element's id does not correspond to the application root id \"{id}\"")]
    RootIdMismatch { id: String },

    #[error("There is no element in the document with id \"{id}\"")]
    ElementVanished { id: String },

    #[error("Render output contains no id-bearing element to mount")]
    EmptyRender,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No page registered for \"{key}\"")]
    MissingPage { key: String },

    #[error("No component registered for \"{key}\"")]
    MissingComponent { key: String },

    // ─────────────────────────────────────────────────────────────
    // Page Lifecycle Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Error rendering page \"{key}\": {message}")]
    PageRender { key: String, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn root_id_mismatch(id: impl Into<String>) -> Self {
        Self::RootIdMismatch { id: id.into() }
    }

    pub fn element_vanished(id: impl Into<String>) -> Self {
        Self::ElementVanished { id: id.into() }
    }

    pub fn missing_page(key: impl Into<String>) -> Self {
        Self::MissingPage { key: key.into() }
    }

    pub fn missing_component(key: impl Into<String>) -> Self {
        Self::MissingComponent { key: key.into() }
    }

    pub fn page_render(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PageRender {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this error is contained to a single page's lifecycle
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PageRender { .. } | Error::MissingPage { .. } | Error::MissingComponent { .. }
        )
    }

    /// Check if this error must abort the current mount/rerender pass
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::RootIdMismatch { .. }
                | Error::ElementVanished { .. }
                | Error::EmptyRender
                | Error::ConfigNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::root_id_mismatch("root");
        assert_eq!(
            err.to_string(),
            "Root DOM element's id does not correspond to the application root id \"root\""
        );

        let err = Error::element_vanished("counter");
        assert!(err.to_string().contains("\"counter\""));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::root_id_mismatch("root").is_fatal());
        assert!(Error::element_vanished("a").is_fatal());
        assert!(Error::EmptyRender.is_fatal());
        assert!(!Error::page_render("home.js", "boom").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::page_render("home.js", "boom").is_recoverable());
        assert!(Error::missing_component("header.js").is_recoverable());
        assert!(!Error::root_id_mismatch("root").is_recoverable());
    }
}
