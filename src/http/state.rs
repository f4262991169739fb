//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::PreparedDataset;
use crate::geo::ShapeCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable prepared dataset
    pub dataset: Arc<PreparedDataset>,
    /// Cached reference topology
    pub shapes: Arc<ShapeCache>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(dataset: Arc<PreparedDataset>, config: AppConfig) -> Self {
        let shapes = Arc::new(ShapeCache::new(config.shapes_max_age));
        Self {
            dataset,
            shapes,
            config: Arc::new(config),
        }
    }
}
