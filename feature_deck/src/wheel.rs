//! Desktop wheel interpretation.
//!
//! One slide per accepted wheel event, at most one per throttle window.
//! At either end of the deck the outward gesture is left alone so the page
//! scrolls past the pinned section.

use std::time::{Duration, Instant};

use crate::config::WheelConfig;
use crate::deck::Deck;
use crate::event::Disposition;
use crate::timer::CommitClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Not ours: out of view, zero delta, or pushing past an edge.
    PassThrough,
    /// Inside the throttle window; swallowed without a state change.
    Suppressed,
    Moved(isize),
}

impl WheelOutcome {
    pub fn disposition(self) -> Disposition {
        match self {
            WheelOutcome::PassThrough => Disposition::PassThrough,
            _                         => Disposition::Consumed,
        }
    }
}

pub struct WheelInterpreter {
    throttle: Duration,
    clock:    CommitClock,
}

impl WheelInterpreter {
    pub fn new(cfg: &WheelConfig) -> Self {
        WheelInterpreter { throttle: cfg.throttle(), clock: CommitClock::new() }
    }

    pub fn on_wheel(&mut self, delta_y: f32, in_view: bool, deck: &mut Deck, now: Instant) -> WheelOutcome {
        if !in_view {
            return WheelOutcome::PassThrough;
        }
        if !self.clock.allows(now, self.throttle) {
            tracing::trace!(delta_y, "wheel suppressed by throttle");
            return WheelOutcome::Suppressed;
        }

        let step = if delta_y > 0.0 && !deck.at_end() {
            1
        } else if delta_y < 0.0 && !deck.at_start() {
            -1
        } else {
            return WheelOutcome::PassThrough;
        };

        self.clock.mark(now);
        deck.go(step);
        tracing::debug!(index = deck.index(), step, source = "wheel", "slide committed");
        WheelOutcome::Moved(step)
    }

    pub fn reset(&mut self) { self.clock.reset(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn setup() -> (WheelInterpreter, Deck, Instant) {
        (WheelInterpreter::new(&WheelConfig::default()), Deck::new(5), Instant::now())
    }

    #[test]
    fn out_of_view_passes_through() {
        let (mut w, mut deck, t0) = setup();
        assert_eq!(w.on_wheel(120.0, false, &mut deck, t0), WheelOutcome::PassThrough);
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn burst_within_window_moves_once() {
        let (mut w, mut deck, t0) = setup();
        assert_eq!(w.on_wheel(100.0, true, &mut deck, t0), WheelOutcome::Moved(1));
        assert_eq!(w.on_wheel(100.0, true, &mut deck, t0 + ms(120)), WheelOutcome::Suppressed);
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn spaced_events_move_twice() {
        let (mut w, mut deck, t0) = setup();
        w.on_wheel(100.0, true, &mut deck, t0);
        assert_eq!(w.on_wheel(100.0, true, &mut deck, t0 + ms(260)), WheelOutcome::Moved(1));
        assert_eq!(deck.index(), 2);
    }

    #[test]
    fn suppressed_events_do_not_extend_the_window() {
        let (mut w, mut deck, t0) = setup();
        w.on_wheel(100.0, true, &mut deck, t0);
        w.on_wheel(100.0, true, &mut deck, t0 + ms(200));
        assert_eq!(w.on_wheel(100.0, true, &mut deck, t0 + ms(251)), WheelOutcome::Moved(1));
    }

    #[test]
    fn last_slide_lets_downward_scroll_through() {
        let (mut w, mut deck, t0) = setup();
        deck.go(4);
        let out = w.on_wheel(100.0, true, &mut deck, t0);
        assert_eq!(out, WheelOutcome::PassThrough);
        assert!(!out.disposition().prevents_default());
        assert_eq!(deck.index(), 4);
    }

    #[test]
    fn first_slide_lets_upward_scroll_through() {
        let (mut w, mut deck, t0) = setup();
        assert_eq!(w.on_wheel(-100.0, true, &mut deck, t0), WheelOutcome::PassThrough);
        assert_eq!(w.on_wheel(100.0, true, &mut deck, t0 + ms(1)), WheelOutcome::Moved(1));
        assert_eq!(w.on_wheel(-100.0, true, &mut deck, t0 + ms(300)), WheelOutcome::Moved(-1));
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let (mut w, mut deck, t0) = setup();
        deck.go(2);
        assert_eq!(w.on_wheel(0.0, true, &mut deck, t0), WheelOutcome::PassThrough);
        assert_eq!(deck.index(), 2);
    }
}
