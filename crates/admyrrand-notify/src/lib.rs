//! # admyrrand-notify
//!
//! The toast notification lifecycle manager.
//!
//! A [`NotificationManager`] owns exactly one notification slot. Showing a
//! notification replaces whatever is in the slot; the notification then
//! closes on its own after its duration, or earlier when dismissed.
//!
//! ## Lifecycle
//!
//! ```text
//!            show                timer / dismiss           exit animation
//! Hidden ──────────► Visible ───────────────────► Closing ───────────────► Hidden
//!                       ▲                            │
//!                       └────────── show ────────────┘
//! ```
//!
//! Timers are tokio tasks held by guards that abort them on drop, so
//! replacing a notification, dismissing it, shutting the manager down, or
//! dropping the last handle cancels every pending transition.

pub mod error;
pub mod manager;
pub mod timer;

pub use error::NotifyError;
pub use manager::{NotificationManager, Phase, ToastSnapshot};
pub use timer::TimerGuard;
