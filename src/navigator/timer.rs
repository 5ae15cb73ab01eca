use std::time::{Duration, Instant};

/// Recurring auto-advance schedule, polled from the event loop.
///
/// The deadline is armed lazily on the first poll after starting or resuming,
/// so callers never need a clock to change state.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    running: bool,
    suspended: bool,
    next_due: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            // A zero interval would fire on every poll
            interval: interval.max(Duration::from_millis(1)),
            running: false,
            suspended: false,
            next_due: None,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.suspended = false;
        self.next_due = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.suspended = false;
        self.next_due = None;
    }

    pub fn suspend(&mut self) {
        if self.running {
            self.suspended = true;
            self.next_due = None;
        }
    }

    pub fn resume(&mut self) {
        if self.suspended {
            self.suspended = false;
            self.next_due = None;
        }
    }

    /// True while the timer would fire on a future poll
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.running && !self.suspended
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns how many whole intervals elapsed since the last poll
    pub fn poll(&mut self, now: Instant) -> usize {
        if !self.is_active() {
            return 0;
        }

        let Some(due) = self.next_due else {
            self.next_due = Some(now + self.interval);
            return 0;
        };

        if now < due {
            return 0;
        }

        let overdue = now.duration_since(due).as_nanos();
        let missed = overdue / self.interval.as_nanos().max(1);
        let fired = usize::try_from(missed).unwrap_or(usize::MAX).saturating_add(1);
        let advance = self
            .interval
            .saturating_mul(u32::try_from(fired).unwrap_or(u32::MAX));
        self.next_due = Some(due.checked_add(advance).unwrap_or(now + self.interval));
        fired
    }
}
