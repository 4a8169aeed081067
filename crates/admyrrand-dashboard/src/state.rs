//! Dashboard application state.

use admyrrand_core::{AdmyrrandConfig, Notification};
use admyrrand_notify::NotificationManager;
use std::sync::Arc;

use crate::error::DashboardError;
use crate::live::LiveFeed;

/// Shared application state for the dashboard.
///
/// Owns the single notification slot for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdmyrrandConfig,
    notifications: NotificationManager,
    live: LiveFeed,
}

impl AppState {
    /// Create a new application state around an existing manager.
    pub fn new(config: AdmyrrandConfig, notifications: NotificationManager) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                notifications,
                live: LiveFeed::new(),
            }),
        }
    }

    /// Create state with a fresh manager bound to the current runtime.
    pub fn from_config(config: AdmyrrandConfig) -> Result<Self, DashboardError> {
        let notifications = NotificationManager::new(&config.notifications)?;
        Ok(Self::new(config, notifications))
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &AdmyrrandConfig {
        &self.inner.config
    }

    /// Get the notification manager.
    pub fn notifications(&self) -> &NotificationManager {
        &self.inner.notifications
    }

    /// Get the real-time updates feed.
    pub fn live_feed(&self) -> &LiveFeed {
        &self.inner.live
    }

    /// Product name for titles and the navigation bar.
    pub fn brand(&self) -> &str {
        &self.inner.config.dashboard.brand
    }

    /// Rows per page in paginated tables.
    pub fn page_size(&self) -> usize {
        self.inner.config.dashboard.page_size
    }

    /// Schedule a page's "loaded" notification after the configured delay.
    pub fn announce(&self, notification: Notification) {
        let settings = &self.inner.config.notifications;
        if settings.announce_page_loads {
            self.inner
                .notifications
                .show_after(settings.page_load_delay(), notification);
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("brand", &self.brand())
            .field("notifications", &self.inner.notifications)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admyrrand_core::NotificationsConfig;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_announce_is_deferred() {
        let state = AppState::from_config(AdmyrrandConfig::default()).unwrap();
        state.announce(Notification::success("Documents Loaded"));
        assert!(state.notifications().snapshot().is_none());
        assert!(state.notifications().has_pending());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        let snap = state.notifications().snapshot().unwrap();
        assert_eq!(snap.notification.title, "Documents Loaded");
    }

    #[tokio::test(start_paused = true)]
    async fn test_announce_disabled() {
        let config = AdmyrrandConfig {
            notifications: NotificationsConfig {
                announce_page_loads: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let state = AppState::from_config(config).unwrap();
        state.announce(Notification::success("Quiet"));
        assert!(!state.notifications().has_pending());
    }
}
