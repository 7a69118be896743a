//! Data Transfer Objects
//!
//! Response types for endpoints that are not plain view outputs.
//! View outputs (`Layout`, `ViewUpdate`) serialize directly.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Aggregated records held in memory
    pub records: usize,
    /// Address the server was configured to bind
    pub listen_addr: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub version: String,
}
