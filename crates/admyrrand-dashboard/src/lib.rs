//! # admyrrand-dashboard
//!
//! Server-rendered analytics dashboard for Admyrrand.
//!
//! This crate provides an embedded web UI for:
//! - Dashboard home (key metrics, revenue, conversion sources, live updates,
//!   transactions)
//! - Analytics (time series, channels, demographics)
//! - API explorer (endpoint catalog with method filter)
//! - Documents, messages and reports (searchable lists)
//! - Settings (profile, security, preferences, billing, integrations)
//!
//! Every page shares one toast notification slot, owned by [`AppState`] and
//! polled by the browser through `/api/notification`.
//!
//! ## Tech Stack
//!
//! - Embedded in single binary (no separate deploy)
//! - Axum for HTTP server
//! - Static assets bundled via `rust-embed`
//! - HTMX + Alpine.js for interactivity (minimal JS)
//! - Tailwind CSS for styling

pub mod api_types;
pub mod assets;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod live;
pub mod notices;
pub mod pages;
pub mod pages_extra;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use routes::create_router;
pub use server::DashboardServer;
pub use state::AppState;
