//! # luminosity-app - Application Shell
//!
//! Luminosity's orchestration layer on top of the renderer:
//!
//! - [`config`] - config.json loading and required-field validation
//! - [`state`] - the shallow-merge application state
//! - [`page`] - the [`Page`] and [`Component`] contracts
//! - [`registry`] - the explicit page/component manifest
//! - [`router`] - hash fragment to route key resolution
//! - [`shell`] - the [`App`] handle and the startup lifecycle
//!
//! A minimal application:
//!
//! ```rust,ignore
//! let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
//! let app = App::new(raw_config, document).expect("valid config");
//! app.register_page("home.js", Rc::new(HomePage));
//! app.register_page("loading.js", Rc::new(LoadingPage));
//! app.register_page("not_found.js", Rc::new(NotFoundPage));
//! app.register_page("error.js", Rc::new(ErrorPage));
//! app.start()?;
//! app.dispatch(&DomEvent::with_target(EventKind::Click, "inc"));
//! ```

pub mod config;
pub mod page;
pub mod registry;
pub mod router;
pub mod shell;
pub mod state;

pub use config::{load_config, Config, RawConfig};
pub use page::{Component, Page};
pub use registry::{route_key, Registry, NOT_FOUND_ROUTE};
pub use router::Router;
pub use shell::{App, PageContext, VERSION};
pub use state::{AppState, StateMap};
