//! Scroll accumulation for touch devices.
//!
//! Wheel events are unreliable on touch screens, so the touch strategy
//! watches window scroll offsets instead.  Deltas are summed over a burst;
//! once the burst has been quiet for the settle period the sum is judged:
//!
//! * `|sum| > min_distance`, or
//! * `|sum| > flick_distance` and the last single delta `> flick_velocity`.
//!
//! A significant burst commits one step in the direction of the sum
//! (scrolling down advances), provided the commit throttle allows it.  The
//! sum and velocity are cleared after every judgement.

use std::time::{Duration, Instant};

use crate::config::ScrollConfig;
use crate::timer::{CommitClock, SettleTimer};

/// Result of judging a settled burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    Insignificant,
    Throttled,
    Commit(isize),
}

pub struct ScrollAccumulator {
    sum:            f32,
    velocity:       f32,
    settle:         SettleTimer,
    throttle:       Duration,
    min_distance:   f32,
    flick_distance: f32,
    flick_velocity: f32,
}

impl ScrollAccumulator {
    pub fn new(cfg: &ScrollConfig) -> Self {
        ScrollAccumulator {
            sum:            0.0,
            velocity:       0.0,
            settle:         SettleTimer::new(cfg.settle()),
            throttle:       cfg.throttle(),
            min_distance:   cfg.min_distance,
            flick_distance: cfg.flick_distance,
            flick_velocity: cfg.flick_velocity,
        }
    }

    pub fn sum(&self)        -> f32  { self.sum }
    pub fn velocity(&self)   -> f32  { self.velocity }
    pub fn is_pending(&self) -> bool { self.settle.is_pending() }

    /// Add one scroll delta and restart the quiet period.
    pub fn push(&mut self, delta: f32, now: Instant) {
        self.sum     += delta;
        self.velocity = delta.abs();
        self.settle.arm(now);
    }

    /// Judge the burst if its settle timer has fired.
    pub fn poll(&mut self, now: Instant, clock: &CommitClock) -> Option<Judgement> {
        if !self.settle.fire(now) {
            return None;
        }
        Some(self.judge(now, clock))
    }

    /// Drop the burst and any pending timer.
    pub fn clear(&mut self) {
        self.sum      = 0.0;
        self.velocity = 0.0;
        self.settle.cancel();
    }

    fn judge(&mut self, now: Instant, clock: &CommitClock) -> Judgement {
        let distance    = self.sum.abs();
        let significant = distance > self.min_distance
            || (distance > self.flick_distance && self.velocity > self.flick_velocity);
        let step = if self.sum > 0.0 { 1 } else { -1 };

        self.sum      = 0.0;
        self.velocity = 0.0;

        if !significant {
            Judgement::Insignificant
        } else if !clock.allows(now, self.throttle) {
            Judgement::Throttled
        } else {
            Judgement::Commit(step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn acc() -> ScrollAccumulator { ScrollAccumulator::new(&ScrollConfig::default()) }

    #[test]
    fn nothing_happens_before_settle() {
        let t0 = Instant::now();
        let mut a = acc();
        a.push(80.0, t0);
        assert_eq!(a.poll(t0 + ms(50), &CommitClock::new()), None);
        assert!(a.is_pending());
    }

    #[test]
    fn long_burst_commits_forward() {
        let t0 = Instant::now();
        let mut a = acc();
        for i in 0..6 {
            a.push(10.0, t0 + ms(i * 16));
        }
        let fire = t0 + ms(5 * 16 + 100);
        assert_eq!(a.poll(fire, &CommitClock::new()), Some(Judgement::Commit(1)));
        assert_eq!(a.sum(), 0.0);
        assert_eq!(a.velocity(), 0.0);
    }

    #[test]
    fn upward_burst_commits_backward() {
        let t0 = Instant::now();
        let mut a = acc();
        a.push(-60.0, t0);
        assert_eq!(a.poll(t0 + ms(100), &CommitClock::new()), Some(Judgement::Commit(-1)));
    }

    #[test]
    fn short_fast_flick_commits() {
        let t0 = Instant::now();
        let mut a = acc();
        a.push(5.0, t0);
        a.push(20.0, t0 + ms(16));
        assert_eq!(a.poll(t0 + ms(116), &CommitClock::new()), Some(Judgement::Commit(1)));
    }

    #[test]
    fn short_slow_drift_is_insignificant() {
        let t0 = Instant::now();
        let mut a = acc();
        for i in 0..5 {
            a.push(8.0, t0 + ms(i * 16));
        }
        assert_eq!(a.poll(t0 + ms(200), &CommitClock::new()), Some(Judgement::Insignificant));
        assert_eq!(a.sum(), 0.0);
    }

    #[test]
    fn throttle_blocks_but_still_resets() {
        let t0 = Instant::now();
        let mut clock = CommitClock::new();
        clock.mark(t0);
        let mut a = acc();
        a.push(90.0, t0 + ms(10));
        assert_eq!(a.poll(t0 + ms(110), &clock), Some(Judgement::Throttled));
        assert_eq!(a.sum(), 0.0);
        a.push(90.0, t0 + ms(350));
        assert_eq!(a.poll(t0 + ms(450), &clock), Some(Judgement::Commit(1)));
    }

    #[test]
    fn each_push_restarts_settle() {
        let t0 = Instant::now();
        let mut a = acc();
        a.push(30.0, t0);
        a.push(30.0, t0 + ms(90));
        assert_eq!(a.poll(t0 + ms(150), &CommitClock::new()), None);
        assert_eq!(a.poll(t0 + ms(190), &CommitClock::new()), Some(Judgement::Commit(1)));
    }

    #[test]
    fn clear_cancels_pending_judgement() {
        let t0 = Instant::now();
        let mut a = acc();
        a.push(90.0, t0);
        a.clear();
        assert_eq!(a.poll(t0 + ms(500), &CommitClock::new()), None);
    }
}
