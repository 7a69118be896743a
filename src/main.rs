//! HiveMap Dashboard Server
//!
//! Run with: cargo run -- --data bees.csv
//!
//! # Configuration
//!
//! Settings are resolved in this order (later wins):
//! - Defaults, or the first config file found at
//!   `<config_dir>/hivemap/config.toml` or `./hivemap.toml`
//!   (`--config` selects a file explicitly)
//! - Environment: `HIVEMAP_DATA`, `HIVEMAP_HOST`, `HIVEMAP_PORT`,
//!   `HIVEMAP_LOG_LEVEL`, `HIVEMAP_LOG_FORMAT`
//! - Command-line flags
//!
//! `RUST_LOG` overrides the log filter entirely.

use anyhow::{Context, Result};
use clap::Parser;
use hivemap::api::{serve, AppState};
use hivemap::config::{generate_default_config, Config, LoggingConfig};
use hivemap::dataset::Dataset;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hivemap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard of bee colonies impacted by Varroa mites across U.S. states")]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset CSV file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose (debug-level) logging
    #[arg(long)]
    debug: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let (config, source) = resolve_config(&cli)?;
    init_logging(&config.logging);

    tracing::info!("HiveMap v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::debug!("Configuration: {:?}", config);

    let data_path = Path::new(&config.dataset.path);
    tracing::info!("Loading dataset from {:?}", data_path);
    let dataset = Dataset::load(data_path)
        .with_context(|| format!("Failed to load dataset {}", data_path.display()))?;
    tracing::info!("Dataset ready: {} records", dataset.len());

    let state = AppState::new(Arc::new(dataset), config.server.clone());
    serve(state, &config.server)
        .await
        .context("Dashboard server failed")?;

    Ok(())
}

/// Merge config file, environment and command-line flags.
///
/// Also returns the config file used, so it can be logged once tracing is up.
fn resolve_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let (config, source) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
        None => Config::load_default()?,
    };

    Ok((apply_cli_overrides(config, cli), source))
}

/// Command-line flags win over file and environment settings
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(data) = &cli.data {
        config.dataset.path = data.to_string_lossy().to_string();
    }
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.debug {
        config.logging.level = "debug".to_string();
    }

    config
}

/// Initialize the tracing subscriber
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("hivemap={0},tower_http={0}", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("hivemap.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[dataset]\npath = \"file.csv\"\n\n[server]\nport = 9000\n\n[logging]\nlevel = \"warn\"\n",
        );
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["hivemap", "--config", path_arg.as_str()]);
        let (config, source) = resolve_config(&cli).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(source, Some(path.clone()));

        let cli = Cli::parse_from([
            "hivemap", "--config", path_arg.as_str(), "--data", "cli.csv", "--port", "9100", "--debug",
        ]);
        let (config, _) = resolve_config(&cli).unwrap();
        assert_eq!(config.dataset.path, "cli.csv");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_sits_between_file_and_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server]\nhost = \"10.0.0.1\"\n");
        let path_arg = path.to_string_lossy().to_string();

        std::env::set_var("HIVEMAP_HOST", "10.0.0.2");

        let cli = Cli::parse_from(["hivemap", "--config", path_arg.as_str()]);
        let (from_env, _) = resolve_config(&cli).unwrap();

        let cli = Cli::parse_from(["hivemap", "--config", path_arg.as_str(), "--host", "10.0.0.3"]);
        let (from_cli, _) = resolve_config(&cli).unwrap();

        std::env::remove_var("HIVEMAP_HOST");

        assert_eq!(from_env.server.host, "10.0.0.2");
        assert_eq!(from_cli.server.host, "10.0.0.3");
    }

    #[test]
    fn test_malformed_config_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server\n");
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["hivemap", "--config", path_arg.as_str()]);

        assert!(resolve_config(&cli).is_err());
    }
}
