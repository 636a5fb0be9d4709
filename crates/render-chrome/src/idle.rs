use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// Tracks Chromium's `networkIdle` lifecycle signal for one tab.
///
/// The page emits `init` when a new document starts loading and
/// `networkIdle` once no requests have been in flight for 500 ms. The
/// tracker is fed from the tab's event thread and waited on by the render
/// thread.
#[derive(Debug, Default)]
pub struct NetworkIdleTracker {
    idle: Mutex<bool>,
    signal: Condvar,
}

impl NetworkIdleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one `Page.lifecycleEvent` name into the tracker.
    pub fn observe(&self, lifecycle_event: &str) {
        match lifecycle_event {
            "init" => self.reset(),
            "networkIdle" => {
                *self.state() = true;
                self.signal.notify_all();
            }
            _ => {}
        }
    }

    pub fn reset(&self) {
        *self.state() = false;
    }

    pub fn is_idle(&self) -> bool {
        *self.state()
    }

    /// Blocks until the network is idle or `timeout` elapses. Returns whether
    /// idle was reached.
    pub fn wait(&self, timeout: Duration) -> bool {
        let guard = self.state();
        match self.signal.wait_timeout_while(guard, timeout, |idle| !*idle) {
            Ok((idle, _)) => *idle,
            Err(poisoned) => *poisoned.into_inner().0,
        }
    }

    fn state(&self) -> MutexGuard<'_, bool> {
        // A panicking event listener cannot leave a bool half-written.
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
