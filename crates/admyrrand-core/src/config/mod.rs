//! Configuration types for the Admyrrand dashboard.
//!
//! Configuration is a single file, YAML (`admyrrand.yaml`) or TOML
//! (`admyrrand.toml`), selected by extension. Every field has a default, so
//! an empty file (or no file at all) yields a working configuration.
//!
//! # Environment
//!
//! - `ADMYRRAND_CONFIG`: path of the configuration file
//! - `ADMYRRAND_PORT`: overrides `dashboard.port`

pub mod dashboard;
pub mod notifications;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use dashboard::DashboardConfig;
pub use notifications::NotificationsConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ADMYRRAND_CONFIG";

/// Environment variable overriding the dashboard port.
pub const PORT_ENV: &str = "ADMYRRAND_PORT";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "admyrrand.yaml";

/// Complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdmyrrandConfig {
    /// Dashboard HTTP server settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Toast notification timing.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info,admyrrand_notify=debug`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit ANSI colors.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            ansi: true,
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdmyrrandConfig {
    /// Load configuration from a YAML or TOML file, by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        if path.extension().map(|e| e == "toml").unwrap_or(false) {
            Self::from_toml(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse configuration from YAML content.
    ///
    /// Empty content yields the default configuration.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Parse configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::from)
    }

    /// Resolve which file to load.
    ///
    /// An explicit path wins, then `ADMYRRAND_CONFIG`. `None` means run
    /// on defaults.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(p.to_path_buf());
        }
        std::env::var_os(CONFIG_ENV).map(PathBuf::from)
    }

    /// Load from the resolved path (if any), then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ADMYRRAND_PORT` if set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.dashboard.port = port
                .parse()
                .map_err(|_| ConfigError::Config(format!("{PORT_ENV} is not a valid port: {port}")))?;
        }
        Ok(())
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.port == 0 {
            return Err(ConfigError::Config("dashboard.port must be non-zero".to_string()));
        }
        if self.dashboard.page_size == 0 {
            return Err(ConfigError::Config(
                "dashboard.page_size must be at least 1".to_string(),
            ));
        }
        if self.notifications.default_duration_ms == 0 {
            return Err(ConfigError::Config(
                "notifications.default_duration_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
