//! Cancellable scheduled tasks, keyed by feature.

use std::time::Duration;

/// Every timer the widget owns. One key, one live timer: scheduling a key
/// that is already pending replaces the pending task, so "restart this
/// feature's timer" is a single operation and features never leak timers
/// into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Delay-mode launcher reveal.
    ShowLauncher,
    /// Configured auto-open of the panel.
    AutoOpen,
    /// Dismiss the typing indicator and inject the canned first message.
    AutoOpenMessage,
    /// Advance the rotating prompt.
    PromptRotation,
    /// Fire one attention animation cycle.
    AttentionStart,
    /// End the current attention animation cycle.
    AttentionStop,
    /// Remove the one-time entry animation class.
    EntryCleanup,
    /// Remove the launcher ripple class.
    RippleCleanup,
}

/// Timer seam. The browser build arms real timeouts and routes firings
/// back into `WidgetController::on_task`; tests drive firings by hand.
pub trait Scheduler {
    /// Arm `key` to fire after `delay`, replacing any pending task for it.
    fn schedule(&mut self, key: TaskKey, delay: Duration);
    fn cancel(&mut self, key: TaskKey);
}

/// Scheduler that records requests instead of arming timers. The test
/// suite (and any host that polls rather than sleeps) inspects the pending
/// set and calls `on_task` itself.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pending: Vec<(TaskKey, Duration)>,
}

impl RecordingScheduler {
    pub fn pending(&self) -> &[(TaskKey, Duration)] {
        &self.pending
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    pub fn delay_of(&self, key: TaskKey) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, delay)| *delay)
    }
}

impl Scheduler for RecordingScheduler {
    fn schedule(&mut self, key: TaskKey, delay: Duration) {
        self.pending.retain(|(k, _)| *k != key);
        self.pending.push((key, delay));
    }

    fn cancel(&mut self, key: TaskKey) {
        self.pending.retain(|(k, _)| *k != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_replaces_pending_task() {
        let mut scheduler = RecordingScheduler::default();
        scheduler.schedule(TaskKey::PromptRotation, Duration::from_secs(5));
        scheduler.schedule(TaskKey::PromptRotation, Duration::from_secs(3));
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(
            scheduler.delay_of(TaskKey::PromptRotation),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn cancel_is_scoped_to_one_key() {
        let mut scheduler = RecordingScheduler::default();
        scheduler.schedule(TaskKey::AutoOpen, Duration::from_secs(5));
        scheduler.schedule(TaskKey::ShowLauncher, Duration::from_secs(2));
        scheduler.cancel(TaskKey::AutoOpen);
        assert!(!scheduler.is_pending(TaskKey::AutoOpen));
        assert!(scheduler.is_pending(TaskKey::ShowLauncher));
    }
}
