//! Route definitions for the dashboard.

use crate::handlers::{self, api};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/analytics", get(handlers::analytics))
        .route("/api-explorer", get(handlers::api_explorer))
        .route("/documents", get(handlers::documents))
        .route("/messages", get(handlers::messages))
        .route("/reports", get(handlers::reports))
        .route("/settings", get(handlers::settings))
        // HTMX list fragments
        .route("/fragments/{list}", get(api::fragment))
        .route("/api/updates/toggle", post(api::toggle_updates))
        // Notifications
        .route("/api/notification", get(api::notification))
        .route("/api/notification.json", get(api::notification_json))
        .route("/api/notification/dismiss", post(api::dismiss))
        .route("/api/notify", post(api::notify))
        .route("/api/actions/{action}", post(api::action))
        // Export
        .route("/api/transactions.csv", get(api::transactions_csv))
        // Static & health
        .route("/assets/{*path}", get(api::asset))
        .route("/healthz", get(api::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
