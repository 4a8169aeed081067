//! Single-slot notification manager.

use admyrrand_core::{Notification, NotificationsConfig};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::error::NotifyError;
use crate::timer::TimerGuard;

/// Where the slot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing displayed.
    Hidden,
    /// Displayed; the dismiss timer is armed.
    Visible,
    /// Exit animation running; removal is scheduled.
    Closing,
}

/// What a renderer needs to draw the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastSnapshot {
    /// Normalized notification (its duration is always positive).
    pub notification: Notification,
    /// `Visible` or `Closing`.
    pub phase: Phase,
    /// Identifies the `show` call this content came from.
    pub generation: u64,
}

/// Handle to the notification slot.
///
/// Cheap to clone; every clone drives the same slot. The slot is torn down
/// by [`NotificationManager::shutdown`] or when the last clone is dropped.
#[derive(Clone)]
pub struct NotificationManager {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<SlotState>,
    runtime: Handle,
    default_duration: Duration,
    exit_animation: Duration,
}

#[derive(Default)]
struct SlotState {
    current: Option<ToastSnapshot>,
    generation: u64,
    /// Dismiss timer while Visible, removal timer while Closing.
    transition: Option<TimerGuard>,
    /// Deferred `show_after` call, if any.
    deferred: Option<TimerGuard>,
    deferred_seq: u64,
    shut_down: bool,
}

impl NotificationManager {
    /// Create a manager bound to the current tokio runtime.
    pub fn new(config: &NotificationsConfig) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(runtime, config))
    }

    /// Create a manager whose timers run on `runtime`.
    pub fn with_runtime(runtime: Handle, config: &NotificationsConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SlotState::default()),
                runtime,
                default_duration: Duration::from_millis(config.default_duration_ms.max(1)),
                exit_animation: config.exit_animation(),
            }),
        }
    }

    /// Display `notification`, replacing whatever is in the slot.
    ///
    /// Works from any phase, including `Closing`, whose pending removal is
    /// cancelled. After [`shutdown`](Self::shutdown) the call is dropped.
    pub fn show(&self, notification: Notification) {
        Shared::show(&self.shared, notification);
    }

    /// Start closing the visible notification.
    ///
    /// No-op while `Closing` or `Hidden`.
    pub fn dismiss(&self) {
        let mut state = self.shared.lock();
        if let Some(generation) = state
            .current
            .as_ref()
            .filter(|t| t.phase == Phase::Visible)
            .map(|t| t.generation)
        {
            Shared::begin_close(&self.shared, &mut state, generation);
        }
    }

    /// Schedule `notification` to be shown after `delay`.
    ///
    /// A newer deferred show replaces a pending one. Immediate `show` calls
    /// do not cancel it; when it fires it supersedes them.
    pub fn show_after(&self, delay: Duration, notification: Notification) {
        let mut state = self.shared.lock();
        if state.shut_down {
            tracing::debug!(title = %notification.title, "Deferred notification dropped after shutdown");
            return;
        }

        state.deferred_seq += 1;
        let seq = state.deferred_seq;
        let weak = Arc::downgrade(&self.shared);
        state.deferred = Some(TimerGuard::schedule(&self.shared.runtime, delay, move || {
            if let Some(shared) = weak.upgrade() {
                {
                    let mut state = shared.lock();
                    if state.deferred_seq == seq {
                        state.deferred = None;
                    }
                }
                Shared::show(&shared, notification);
            }
        }));
    }

    /// Current slot content, or `None` when hidden.
    pub fn snapshot(&self) -> Option<ToastSnapshot> {
        self.shared.lock().current.clone()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.shared
            .lock()
            .current
            .as_ref()
            .map(|t| t.phase)
            .unwrap_or(Phase::Hidden)
    }

    /// Whether a deferred show is waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.shared.lock().deferred.is_some()
    }

    /// Tear the slot down: cancel all timers, clear the slot, and ignore
    /// every later `show`.
    pub fn shutdown(&self) {
        let mut state = self.shared.lock();
        state.shut_down = true;
        state.current = None;
        state.transition = None;
        state.deferred = None;
        tracing::debug!("Notification manager shut down");
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shared.lock().shut_down
    }
}

impl std::fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationManager")
            .field("phase", &self.phase())
            .finish()
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn show(this: &Arc<Self>, notification: Notification) {
        let mut state = this.lock();
        if state.shut_down {
            tracing::debug!(title = %notification.title, "Notification dropped after shutdown");
            return;
        }

        let duration = notification.display_duration(this.default_duration);
        let notification = notification.normalized(this.default_duration);

        state.generation += 1;
        let generation = state.generation;

        tracing::debug!(
            generation,
            kind = %notification.kind,
            title = %notification.title,
            duration_ms = notification.duration_ms,
            "Notification shown"
        );

        state.current = Some(ToastSnapshot {
            notification,
            phase: Phase::Visible,
            generation,
        });
        // Replacing the guard aborts the previous dismiss or removal timer.
        state.transition = Some(Self::arm(this, duration, move |shared| {
            let mut state = shared.lock();
            let still_visible = state
                .current
                .as_ref()
                .is_some_and(|t| t.generation == generation && t.phase == Phase::Visible);
            if still_visible {
                Self::begin_close(shared, &mut state, generation);
            }
        }));
    }

    /// Visible -> Closing for `generation`; caller holds the lock.
    fn begin_close(this: &Arc<Self>, state: &mut SlotState, generation: u64) {
        let Some(toast) = state.current.as_mut() else {
            return;
        };
        if toast.generation != generation || toast.phase != Phase::Visible {
            return;
        }

        toast.phase = Phase::Closing;
        tracing::debug!(generation, "Notification closing");

        state.transition = Some(Self::arm(this, this.exit_animation, move |shared| {
            let mut state = shared.lock();
            let closing = state
                .current
                .as_ref()
                .is_some_and(|t| t.generation == generation && t.phase == Phase::Closing);
            if closing {
                state.current = None;
                state.transition = None;
                tracing::debug!(generation, "Notification removed");
            }
        }));
    }

    /// Schedule `f` with a weak back-reference so pending timers never keep
    /// a torn-down slot alive.
    fn arm<F>(this: &Arc<Self>, delay: Duration, f: F) -> TimerGuard
    where
        F: FnOnce(&Arc<Self>) + Send + 'static,
    {
        let weak: Weak<Self> = Arc::downgrade(this);
        TimerGuard::schedule(&this.runtime, delay, move || {
            if let Some(shared) = weak.upgrade() {
                f(&shared);
            }
        })
    }
}
