//! # HiveMap
//!
//! Interactive dashboard mapping the share of honeybee colonies impacted by
//! Varroa mites across U.S. states, one year at a time.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and group-by-mean aggregation
//! - [`view`]: Layout, update callback and choropleth figure
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hivemap::{AppState, Dataset, ServerConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load once, share read-only
//!     let dataset = Arc::new(Dataset::load("bees.csv".as_ref())?);
//!
//!     let config = ServerConfig::default();
//!     hivemap::serve(AppState::new(dataset, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod view;

pub use dataset::{
    aggregate, AggregatedRecord, Dataset, DatasetError, DatasetResult, DatasetSummary, GroupKey,
    RawRecord,
};

pub use view::{
    Layout, MapFigure, SelectionState, ViewController, ViewUpdate, DEFAULT_YEAR, VARROA_CATEGORY,
    YEAR_OPTIONS,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
