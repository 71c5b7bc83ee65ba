//! Trailing-edge debounce timer for autosave.
//!
//! Poll-driven: field setters call `touch()` to mark the channel dirty and
//! restart the countdown; the front-end loop periodically asks `take_due()`
//! whether the channel has been quiet for the full delay. A burst of edits
//! therefore collapses into a single save once the user pauses, and the
//! save always carries the final values.

use std::time::{Duration, Instant};

/// Quiescence delay before an autosave fires.
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_secs(1);

/// Debounce state for one persistence channel.
#[derive(Debug)]
pub struct AutosaveTimer {
    delay: Duration,
    pending: bool,
    last_change: Option<Instant>,
}

impl AutosaveTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: false,
            last_change: None,
        }
    }

    /// Record a mutation: mark the channel dirty and restart the countdown.
    pub fn touch(&mut self) {
        self.touch_at(Instant::now());
    }

    pub(crate) fn touch_at(&mut self, now: Instant) {
        self.pending = true;
        self.last_change = Some(now);
    }

    /// Whether a mutation is waiting to be saved.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending flag if the channel has been quiescent for the
    /// full delay at `now`. Returns `true` at most once per settled burst.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let due = match self.last_change {
            Some(changed) if self.pending => now.duration_since(changed) >= self.delay,
            _ => false,
        };
        if due {
            self.pending = false;
        }
        due
    }

    /// Consume the pending flag unconditionally (explicit flush, e.g. on
    /// exit). The countdown state is irrelevant once the save happens.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drop any pending state without saving.
    pub fn clear(&mut self) {
        self.pending = false;
        self.last_change = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_not_due_before_delay() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.touch_at(t0);
        assert!(timer.is_pending());
        assert!(!timer.take_due(t0));
        assert!(!timer.take_due(t0 + Duration::from_millis(99)));
        assert!(timer.is_pending());
    }

    #[test]
    fn test_due_after_quiescence() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.touch_at(t0);
        assert!(timer.take_due(t0 + DELAY));
        // Consumed: a second poll performs no second save.
        assert!(!timer.take_due(t0 + DELAY * 2));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_touch_restarts_countdown() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.touch_at(t0);
        timer.touch_at(t0 + Duration::from_millis(80));
        // 100ms after the first touch, but only 20ms after the second.
        assert!(!timer.take_due(t0 + Duration::from_millis(100)));
        assert!(timer.take_due(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn test_take_pending_ignores_countdown() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        assert!(!timer.take_pending());
        timer.touch_at(t0);
        assert!(timer.take_pending());
        assert!(!timer.take_pending());
    }

    #[test]
    fn test_clear_drops_pending_state() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.touch_at(t0);
        timer.clear();
        assert!(!timer.is_pending());
        assert!(!timer.take_due(t0 + DELAY * 2));
    }
}
