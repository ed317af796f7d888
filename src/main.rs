// Main entry point for screenshot-cleaner.
// Parses configuration, sets up logging and shared state, and serves the
// HTTP API plus the browser front end until shutdown.

mod file_store;
mod lifecycle;
mod shutdown_signal;
mod stats;
mod web;

use clap::Parser;
use file_store::FileStore;
use lifecycle::{
    BROWSER_LAUNCH_DELAY, DRAIN_TIMEOUT, Lifecycle, LifecycleState, browser_url,
    spawn_browser_launch, spawn_drain_deadline,
};
use stats::StatsTracker;
use std::{path::PathBuf, sync::Arc};
use tracing::Level;
use web::{AppState, IndexPage};

/// Command line arguments for screenshot-cleaner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct AppConfig {
    /// Directory containing the screenshots to manage.
    #[arg(short, long, env = "SCREENSHOT_CLEANER_DIR")]
    dir: PathBuf,

    /// Hostname/IP to bind the server to.
    /// "*" listens on all interfaces (IPv6 dual-stack, falling back to IPv4).
    #[arg(long, env = "SCREENSHOT_CLEANER_HOST", default_value = "*")]
    host: String,

    /// Port number to listen on.
    #[arg(short, long, env = "SCREENSHOT_CLEANER_PORT", default_value_t = 8000)]
    port: u16,

    /// Serve this HTML file at "/" instead of the bundled page.
    #[arg(long, env = "SCREENSHOT_CLEANER_INDEX_FILE")]
    index_file: Option<PathBuf>,

    /// Do not open a browser tab on startup.
    #[arg(long, env = "SCREENSHOT_CLEANER_NO_BROWSER", action = clap::ArgAction::SetTrue)]
    no_browser: bool,
}

#[tokio::main]
async fn main() {
    // Parse command line args and environment variables
    let config = AppConfig::parse();

    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true) // Include module path in logs
        .with_file(true) // Include source file name
        .with_line_number(true) // Include line numbers
        .init();

    tracing::info!("Starting screenshot-cleaner...");

    let store = FileStore::new(&config.dir);
    if store.directory().is_dir() {
        tracing::info!("Screenshot directory set to: {}", store.directory().display());
    } else {
        tracing::warn!(
            "Screenshot directory not found at {}. Listing will be empty until it exists.",
            store.directory().display()
        );
    }

    let index_page = match config.index_file {
        Some(path) => {
            tracing::info!("Serving index page from {}", path.display());
            IndexPage::File(path)
        }
        None => IndexPage::Bundled,
    };

    let lifecycle = Arc::new(Lifecycle::default());

    let state = Arc::new(AppState {
        store,
        stats: StatsTracker::default(),
        lifecycle: lifecycle.clone(),
        index_page,
    });

    let app = web::create_app(state);
    tracing::info!("Axum router configured.");

    // --- Start HTTP Server ---
    let listener = match web::create_listener(&config.host, config.port).await {
        Ok((addr, l)) => {
            tracing::info!("Server successfully bound. Listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("FATAL: Failed to bind server: {}", e);
            eprintln!("FATAL: Could not bind server. Error: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    if !config.no_browser {
        spawn_browser_launch(browser_url(&config.host, config.port), BROWSER_LAUNCH_DELAY);
    }

    let shutdown = {
        let lifecycle = lifecycle.clone();
        async move {
            shutdown_signal::shutdown_signal(lifecycle.clone()).await;
            if lifecycle.state() == LifecycleState::Terminating {
                tracing::info!("Stopping server on client request");
            }
            tracing::info!("Draining open connections...");
            spawn_drain_deadline(DRAIN_TIMEOUT);
        }
    };

    // Run the server.
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!("Server run error: {}", e);
        eprintln!("ERROR: Server shut down unexpectedly. Error: {}", e);
    }

    tracing::info!("screenshot-cleaner has shut down.");
}
