//! Dashboard configuration.
//!
//! This module defines where the dashboard web UI listens.

use serde::{Deserialize, Serialize};

/// Configuration for the dashboard HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Product name shown in the navigation bar and page titles.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Rows per page in paginated tables.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            brand: default_brand(),
            page_size: default_page_size(),
        }
    }
}

impl DashboardConfig {
    /// The `host:port` pair to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_brand() -> String {
    "Admyrrand Analytics".to_string()
}

fn default_page_size() -> usize {
    10
}
