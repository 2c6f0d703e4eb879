//! Luminosity - demo application entry point
//!
//! Runs the demo app headlessly: starts the shell against a config file
//! (or the built-in demo config), optionally navigates and dispatches
//! clicks, and prints the final document.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::info;

use luminosity::demo;
use luminosity_app::App;
use luminosity_core::document::Document;
use luminosity_core::events::{DomEvent, EventKind};

/// Luminosity - a minimal client-side UI framework, run headlessly
#[derive(Parser, Debug)]
#[command(name = "luminosity")]
#[command(about = "Run the Luminosity demo app headlessly", long_about = None)]
struct Args {
    /// Path to config.json (defaults to the built-in demo config)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Navigate to a route hash after startup (e.g. "#/home")
    #[arg(long)]
    route: Option<String>,

    /// Dispatch a click on the element with this id (repeatable)
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,

    /// Print the final serialized document to stdout
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    luminosity_core::logging::init()?;

    let raw = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "loading config");
            luminosity_app::load_config(path)?
        }
        None => {
            info!("no config given, using the built-in demo config");
            demo::sample_config()
        }
    };

    let document = Rc::new(RefCell::new(Document::with_mount_point("root")));
    let app = App::new(raw, document.clone())
        .ok_or_else(|| eyre!("configuration check failed, see the error log"))?;
    demo::register(&app);
    app.start()?;

    if let Some(route) = &args.route {
        info!(%route, "navigating");
        app.navigate(route)?;
    }
    for id in &args.clicks {
        info!(%id, "dispatching click");
        app.dispatch(&DomEvent::with_target(EventKind::Click, id.clone()));
    }

    if args.dump {
        println!("{}", document.borrow().to_html());
    }
    Ok(())
}
