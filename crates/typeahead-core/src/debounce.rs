// ABOUTME: Debounced query trigger built on a cancelable tokio timer task
// ABOUTME: Only the latest pending call ever fires; superseded calls are aborted

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Configuration for debouncing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long input must stay quiet before the pending call fires.
    pub quiet_period: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(300),
        }
    }
}

/// Rate-limits a transition so it runs at most once per quiet period.
///
/// Each call replaces the pending timer task (the explicit timer handle);
/// when the timer elapses, the value is delivered on the channel handed in
/// at construction. This is a debounce, not a rate limiter with guaranteed
/// periodic execution: superseded calls are discarded, never executed.
pub struct Debouncer<T> {
    config: DebounceConfig,
    tx: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(config: DebounceConfig, tx: mpsc::Sender<T>) -> Self {
        Self {
            config,
            tx,
            pending: None,
        }
    }

    /// Schedule `value` to fire after the quiet period, canceling any
    /// previously pending call.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let quiet_period = self.config.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = tx.send(value).await;
        }));
    }

    /// Drop the pending call without executing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
