//! Throttle timestamps and single-slot settle timers.
//!
//! Nothing here sleeps.  The event loop passes the current `Instant` in and
//! polls [`SettleTimer::fire`] once per frame.

use std::time::{Duration, Instant};

/// Timestamp of the last accepted index change.
///
/// One clock may be checked against several windows: the touch strategy
/// shares a single clock between scroll accumulation (400ms) and vertical
/// swipes (300ms).
#[derive(Clone, Copy, Debug, Default)]
pub struct CommitClock {
    last: Option<Instant>,
}

impl CommitClock {
    pub fn new() -> Self { Self::default() }

    /// True when strictly more than `window` has passed since the last
    /// commit, or nothing has been committed yet.
    pub fn allows(&self, now: Instant, window: Duration) -> bool {
        match self.last {
            None       => true,
            Some(last) => now.saturating_duration_since(last) > window,
        }
    }

    pub fn mark(&mut self, now: Instant) { self.last = Some(now); }

    pub fn reset(&mut self) { self.last = None; }

    pub fn last(&self) -> Option<Instant> { self.last }
}

/// A quiet-period timer with one pending slot.
///
/// Arming while a deadline is pending replaces it, so the timer only fires
/// once input has stopped for `delay`.
#[derive(Clone, Copy, Debug)]
pub struct SettleTimer {
    delay:    Duration,
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        SettleTimer { delay, deadline: None }
    }

    /// (Re)start the quiet period from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) { self.deadline = None; }

    pub fn is_pending(&self) -> bool { self.deadline.is_some() }

    /// Consume the deadline if it has passed.  Fires at most once per arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn fresh_clock_allows_anything() {
        let clock = CommitClock::new();
        assert!(clock.allows(Instant::now(), ms(250)));
    }

    #[test]
    fn clock_window_is_strict() {
        let t0 = Instant::now();
        let mut clock = CommitClock::new();
        clock.mark(t0);
        assert!(!clock.allows(t0 + ms(250), ms(250)));
        assert!(clock.allows(t0 + ms(251), ms(250)));
    }

    #[test]
    fn shared_clock_checks_different_windows() {
        let t0 = Instant::now();
        let mut clock = CommitClock::new();
        clock.mark(t0);
        let t = t0 + ms(350);
        assert!(clock.allows(t, ms(300)));
        assert!(!clock.allows(t, ms(400)));
    }

    #[test]
    fn settle_fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new(ms(100));
        timer.arm(t0);
        assert!(!timer.fire(t0 + ms(99)));
        assert!(timer.fire(t0 + ms(100)));
        assert!(!timer.fire(t0 + ms(500)));
    }

    #[test]
    fn rearming_supersedes_pending_deadline() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new(ms(100));
        timer.arm(t0);
        timer.arm(t0 + ms(80));
        assert!(!timer.fire(t0 + ms(120)));
        assert!(timer.fire(t0 + ms(180)));
    }

    #[test]
    fn cancel_clears_slot() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new(ms(100));
        timer.arm(t0);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire(t0 + ms(200)));
    }
}
