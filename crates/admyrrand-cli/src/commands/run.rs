//! `admyrrand run`: load configuration, set up logging, serve the dashboard.
//!
//! The server stops gracefully on Ctrl-C; pending notification timers are
//! torn down with it.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use admyrrand_core::{AdmyrrandConfig, LoggingConfig};
use admyrrand_dashboard::DashboardServer;

use super::config_path;

/// Run the dashboard.
///
/// # Arguments
///
/// * `config` - Explicit configuration file, if any
/// * `host` - Override `dashboard.host`
/// * `port` - Override `dashboard.port`
pub async fn run(config: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let path = config_path(config.as_deref());
    let mut config = AdmyrrandConfig::load(path.as_deref()).with_context(|| match &path {
        Some(p) => format!("Failed to load configuration from {}", p.display()),
        None => "Invalid configuration".to_string(),
    })?;

    if let Some(host) = host {
        config.dashboard.host = host;
    }
    if let Some(port) = port {
        config.dashboard.port = port;
    }
    config.validate().context("Invalid command-line override")?;

    init_tracing(&config.logging);

    match &path {
        Some(p) => info!(config = %p.display(), "Loaded configuration"),
        None => info!("No configuration file found, using defaults"),
    }

    let server = DashboardServer::new(config)?;
    info!(
        port = server.listen_port(),
        "Dashboard available at http://{}",
        server.state().config().dashboard.bind_addr()
    );

    server.run(shutdown_signal()).await?;
    Ok(())
}

/// Install the global subscriber.
fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok(), logging))
        .with_ansi(logging.ansi)
        .init();
}

/// `RUST_LOG` wins, then the configured directive, then `info`.
fn env_filter(rust_log: Option<String>, logging: &LoggingConfig) -> EnvFilter {
    rust_log
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(&logging.filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
            ansi: false,
        }
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = env_filter(Some("warn".to_string()), &logging("debug"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_config_directive_used_without_rust_log() {
        let filter = env_filter(None, &logging("admyrrand_notify=debug"));
        assert_eq!(filter.to_string(), "admyrrand_notify=debug");
    }

    #[tokio::test]
    async fn test_missing_config_file_is_an_error() {
        let err = run(Some(PathBuf::from("/nonexistent/admyrrand.yaml")), None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/admyrrand.yaml"));
    }

    #[tokio::test]
    async fn test_zero_port_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admyrrand.yaml");
        std::fs::write(&path, "").unwrap();

        let err = run(Some(path), None, Some(0)).await.unwrap_err();
        assert!(err.to_string().contains("override"));
    }
}
