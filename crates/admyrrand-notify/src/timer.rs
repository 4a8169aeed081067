//! Cancellable one-shot timers.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// A scheduled callback that is cancelled when the guard is dropped.
///
/// Holding the guard keeps the timer armed; replacing or dropping it is
/// the only way to cancel.
#[derive(Debug)]
pub struct TimerGuard {
    handle: AbortHandle,
}

impl TimerGuard {
    /// Run `callback` on `runtime` once `delay` has elapsed.
    pub fn schedule<F>(runtime: &Handle, delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self {
            handle: task.abort_handle(),
        }
    }

    /// Cancel explicitly. Equivalent to dropping the guard.
    pub fn cancel(self) {}
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
