//! Application state shared across all request handlers.

use std::sync::Arc;

use snipbin_core::{AppConfig, SnippetDb};

/// Shared application state available to all request handlers.
///
/// Cheap to clone: the database handle shares one underlying connection and
/// the config is behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Snippet store handle.
    pub db: SnippetDb,

    /// Application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create application state from an opened store and loaded config.
    pub fn new(db: SnippetDb, config: AppConfig) -> Self {
        tracing::info!(
            db_path = %config.db_path.display(),
            static_dir = %config.static_dir.display(),
            utc_offset_minutes = config.utc_offset_minutes,
            "application state initialized"
        );

        Self { db, config: Arc::new(config) }
    }
}
