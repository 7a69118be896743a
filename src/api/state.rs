//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::view::ViewController;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// View controller over the immutable dataset
    pub controller: Arc<ViewController>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        Self {
            controller: Arc::new(ViewController::new(dataset)),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn dataset(&self) -> &Dataset {
        self.controller.dataset()
    }
}
