//! Notification timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::notification::DEFAULT_DURATION_MS;

/// Timing knobs for the toast notification manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Display duration used when a notification does not carry a positive one.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,

    /// Length of the closing (exit) animation before the toast is removed.
    #[serde(default = "default_exit_animation_ms")]
    pub exit_animation_ms: u64,

    /// Delay between a page load and its "loaded" announcement.
    #[serde(default = "default_page_load_delay_ms")]
    pub page_load_delay_ms: u64,

    /// Whether pages announce themselves when loaded.
    #[serde(default = "default_true")]
    pub announce_page_loads: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            exit_animation_ms: default_exit_animation_ms(),
            page_load_delay_ms: default_page_load_delay_ms(),
            announce_page_loads: true,
        }
    }
}

impl NotificationsConfig {
    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }

    pub fn page_load_delay(&self) -> Duration {
        Duration::from_millis(self.page_load_delay_ms)
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS as u64
}

fn default_exit_animation_ms() -> u64 {
    200
}

fn default_page_load_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}
