//! Dashboard server implementation.

use std::future::Future;

use admyrrand_core::AdmyrrandConfig;
use tokio::net::TcpListener;

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;

/// The dashboard server.
#[derive(Debug)]
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server with the given configuration.
    ///
    /// Must be called inside a tokio runtime; the notification manager binds
    /// its timers to it.
    pub fn new(config: AdmyrrandConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            state: AppState::from_config(config)?,
        })
    }

    /// Shared state handed to every handler.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start the dashboard server and run until `shutdown` resolves.
    ///
    /// The notification manager is torn down once the server stops.
    pub async fn run<F>(self, shutdown: F) -> Result<(), DashboardError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.state.config().dashboard.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(format!("failed to bind {addr}: {e}")))?;

        let local = listener
            .local_addr()
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;
        tracing::info!(address = %local, brand = %self.state.brand(), "Starting dashboard");

        let app = routes::create_router(self.state.clone());
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()));

        self.state.notifications().shutdown();
        tracing::info!("Dashboard stopped");
        result
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.state.config().dashboard.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_creation() {
        let server = DashboardServer::new(AdmyrrandConfig::default()).unwrap();
        assert_eq!(server.listen_port(), 8080);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown_and_tears_down_slot() {
        let mut config = AdmyrrandConfig::default();
        config.dashboard.port = 0;
        let server = DashboardServer::new(config).unwrap();
        let state = server.state().clone();

        server.run(async {}).await.unwrap();
        assert!(state.notifications().is_shut_down());
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let err = DashboardServer::new(AdmyrrandConfig::default()).unwrap_err();
        assert!(matches!(err, DashboardError::Notify(_)));
    }
}
