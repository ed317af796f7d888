// Web server module
// Handles the HTTP API for listing, previewing and deleting screenshots

mod app;
mod error;
mod handlers;
mod listeners;
mod models;

pub use app::create_app;
pub use listeners::create_listener;

use crate::{file_store::FileStore, lifecycle::Lifecycle, stats::StatsTracker};
use std::path::PathBuf;
use std::sync::Arc;

// Maximum allowed size for JSON request bodies
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024; // 1MB

/// Where the front-end entry page comes from.
#[derive(Debug, Clone)]
pub enum IndexPage {
    /// The page compiled into the binary.
    Bundled,
    /// A page read from disk on every request.
    File(PathBuf),
}

/// State shared by all handlers.
pub struct AppState {
    pub store: FileStore,
    pub stats: StatsTracker,
    pub lifecycle: Arc<Lifecycle>,
    pub index_page: IndexPage,
}

pub type SharedState = Arc<AppState>;
