//! Error types for the notification manager.

use thiserror::Error;

/// Errors raised when constructing a manager.
///
/// Once constructed, no manager operation can fail.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The manager was created outside a tokio runtime.
    #[error("notification manager requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
