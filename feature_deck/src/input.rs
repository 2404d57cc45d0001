//! Input strategies: one per device class, chosen once at mount.
//!
//! The showcase never branches on device type.  It asks
//! [`select_strategy`] for a boxed [`InputStrategy`] and from then on only
//! talks to the trait: `attach()` says which raw events to listen for,
//! `handle()`/`tick()` interpret them, `detach()` tears everything down.
//!
//! | Strategy | Listens to | Visibility | Gestures |
//! |---|---|---|---|
//! | [`PointerStrategy`] | wheel, touch start/end | intersection | wheel steps, horizontal swipe |
//! | [`TouchStrategy`] | scroll, touch start/move/end | geometry poll or sticky intersection | scroll accumulation, vertical swipe |

use std::time::{Duration, Instant};

use crate::accumulate::{Judgement, ScrollAccumulator};
use crate::config::{InputMode, ShowcaseConfig, TouchVisibility};
use crate::deck::Deck;
use crate::event::{Disposition, EventMask, RawEvent};
use crate::swipe::{HorizontalSwipe, VerticalSwipe};
use crate::timer::CommitClock;
use crate::visibility::{Visibility, VisibilityMode};
use crate::wheel::WheelInterpreter;

// ════════════════════════════════════════════════════════════════════════════
// Capabilities
// ════════════════════════════════════════════════════════════════════════════

/// User-agent tokens that identify a handheld browser (matched
/// case-insensitively).
const MOBILE_TOKENS: &[&str] = &[
    "android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini",
];

/// What the host platform reports about the device.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub user_agent:       Option<String>,
    pub viewport_width:   f32,
    pub max_touch_points: u32,
}

impl Capabilities {
    pub fn mobile_user_agent(&self) -> bool {
        self.user_agent.as_deref().is_some_and(|ua| {
            let ua = ua.to_ascii_lowercase();
            MOBILE_TOKENS.iter().any(|t| ua.contains(t))
        })
    }

    /// Mobile user agent, or a touch screen no wider than `max_width`.
    pub fn prefers_touch(&self, max_width: f32) -> bool {
        self.mobile_user_agent()
            || (self.max_touch_points > 0 && self.viewport_width <= max_width)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// InputStrategy trait
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind { Pointer, Touch }

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Pointer => "pointer",
            StrategyKind::Touch   => "touch",
        }
    }
}

/// Everything a strategy may read or change while handling one event.
pub struct GestureContext<'a> {
    pub deck:       &'a mut Deck,
    pub visibility: Visibility,
    pub now:        Instant,
}

pub trait InputStrategy {
    fn kind(&self) -> StrategyKind;

    /// Visibility signal this strategy trusts.
    fn visibility_mode(&self) -> VisibilityMode;

    /// Raw events to subscribe to.
    fn attach(&mut self) -> EventMask;

    /// Drop in-flight gestures and pending timers.  Safe to call twice.
    fn detach(&mut self);

    fn handle(&mut self, event: &RawEvent, cx: &mut GestureContext<'_>) -> Disposition;

    /// Fire due timers.  Called once per frame.
    fn tick(&mut self, _cx: &mut GestureContext<'_>) {}
}

/// Pick the strategy for this device, honouring a forced [`InputMode`].
pub fn select_strategy(caps: &Capabilities, cfg: &ShowcaseConfig) -> Box<dyn InputStrategy> {
    let touch = match cfg.input.mode {
        InputMode::Pointer => false,
        InputMode::Touch   => true,
        InputMode::Auto    => caps.prefers_touch(cfg.input.mobile_max_width),
    };
    if touch {
        Box::new(TouchStrategy::new(cfg))
    } else {
        Box::new(PointerStrategy::new(cfg))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PointerStrategy
// ════════════════════════════════════════════════════════════════════════════

pub struct PointerStrategy {
    wheel:      WheelInterpreter,
    swipe:      HorizontalSwipe,
    visibility: VisibilityMode,
}

impl PointerStrategy {
    pub fn new(cfg: &ShowcaseConfig) -> Self {
        PointerStrategy {
            wheel:      WheelInterpreter::new(&cfg.wheel),
            swipe:      HorizontalSwipe::new(&cfg.swipe),
            visibility: VisibilityMode::intersection(&cfg.visibility),
        }
    }
}

impl InputStrategy for PointerStrategy {
    fn kind(&self) -> StrategyKind { StrategyKind::Pointer }

    fn visibility_mode(&self) -> VisibilityMode { self.visibility.clone() }

    fn attach(&mut self) -> EventMask {
        EventMask::WHEEL | EventMask::TOUCH_START | EventMask::TOUCH_END
    }

    fn detach(&mut self) {
        self.wheel.reset();
        self.swipe.cancel();
    }

    fn handle(&mut self, event: &RawEvent, cx: &mut GestureContext<'_>) -> Disposition {
        match *event {
            RawEvent::Wheel { delta_y } => self
                .wheel
                .on_wheel(delta_y, cx.visibility.in_view, cx.deck, cx.now)
                .disposition(),
            RawEvent::TouchStart { x, y, on_target } => {
                if on_target {
                    self.swipe.start(x, y);
                } else {
                    self.swipe.cancel();
                }
                Disposition::PassThrough
            }
            RawEvent::TouchEnd { x, y } => {
                if let Some(step) = self.swipe.end(x, y) {
                    if cx.visibility.in_view && cx.deck.go(step) {
                        tracing::debug!(index = cx.deck.index(), step, source = "swipe", "slide committed");
                    }
                }
                Disposition::PassThrough
            }
            _ => Disposition::PassThrough,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TouchStrategy
// ════════════════════════════════════════════════════════════════════════════

/// Phones: native scrolling always proceeds; the deck follows settled
/// scroll bursts and vertical swipes, both sharing one commit clock.
pub struct TouchStrategy {
    accumulator:    ScrollAccumulator,
    swipe:          VerticalSwipe,
    clock:          CommitClock,
    swipe_throttle: Duration,
    last_scroll_y:  Option<f32>,
    visibility:     VisibilityMode,
}

impl TouchStrategy {
    pub fn new(cfg: &ShowcaseConfig) -> Self {
        let visibility = match cfg.input.touch_visibility {
            TouchVisibility::Geometry           => VisibilityMode::geometry_poll(&cfg.visibility),
            TouchVisibility::StickyIntersection => VisibilityMode::sticky_intersection(&cfg.visibility),
        };
        TouchStrategy {
            accumulator:    ScrollAccumulator::new(&cfg.scroll),
            swipe:          VerticalSwipe::new(&cfg.swipe),
            clock:          CommitClock::new(),
            swipe_throttle: cfg.swipe.throttle(),
            last_scroll_y:  None,
            visibility,
        }
    }

    fn commit(&mut self, step: isize, source: &'static str, cx: &mut GestureContext<'_>) {
        if cx.deck.go(step) {
            self.clock.mark(cx.now);
            tracing::debug!(index = cx.deck.index(), step, source, "slide committed");
        }
    }
}

impl InputStrategy for TouchStrategy {
    fn kind(&self) -> StrategyKind { StrategyKind::Touch }

    fn visibility_mode(&self) -> VisibilityMode { self.visibility.clone() }

    fn attach(&mut self) -> EventMask {
        EventMask::SCROLL | EventMask::TOUCH
    }

    fn detach(&mut self) {
        self.accumulator.clear();
        self.swipe.cancel();
        self.clock.reset();
        self.last_scroll_y = None;
    }

    fn handle(&mut self, event: &RawEvent, cx: &mut GestureContext<'_>) -> Disposition {
        match *event {
            RawEvent::Scroll { scroll_y } => {
                let delta = self.last_scroll_y.map_or(0.0, |last| scroll_y - last);
                self.last_scroll_y = Some(scroll_y);

                if !(cx.visibility.in_view && cx.visibility.sticky) {
                    self.accumulator.clear();
                } else if delta != 0.0 {
                    self.accumulator.push(delta, cx.now);
                }
            }
            RawEvent::TouchStart { y, .. } => self.swipe.start(y, cx.now),
            RawEvent::TouchMove { y, .. }  => self.swipe.moved(y),
            RawEvent::TouchEnd { y, .. } => {
                if let Some(step) = self.swipe.end(y, cx.now) {
                    if !cx.visibility.in_view {
                        tracing::trace!(step, "swipe ignored out of view");
                    } else if !self.clock.allows(cx.now, self.swipe_throttle) {
                        tracing::trace!(step, "swipe throttled");
                    } else {
                        self.commit(step, "swipe", cx);
                    }
                }
            }
            _ => {}
        }
        Disposition::PassThrough
    }

    fn tick(&mut self, cx: &mut GestureContext<'_>) {
        match self.accumulator.poll(cx.now, &self.clock) {
            Some(Judgement::Commit(step)) if cx.visibility.in_view => self.commit(step, "scroll", cx),
            Some(judgement) => tracing::trace!(?judgement, "scroll burst settled without commit"),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputConfig;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    const VISIBLE: Visibility = Visibility { in_view: true, sticky: true };
    const HIDDEN:  Visibility = Visibility { in_view: false, sticky: false };

    fn cx(deck: &mut Deck, visibility: Visibility, now: Instant) -> GestureContext<'_> {
        GestureContext { deck, visibility, now }
    }

    #[test]
    fn user_agent_sniffing_is_case_insensitive() {
        let caps = Capabilities {
            user_agent: Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into()),
            viewport_width: 1280.0,
            max_touch_points: 0,
        };
        assert!(caps.mobile_user_agent());
        assert!(caps.prefers_touch(768.0));
        let opera = Capabilities { user_agent: Some("OPERA MINI/4.2".into()), ..Capabilities::default() };
        assert!(opera.mobile_user_agent());
    }

    #[test]
    fn wide_touch_screens_keep_the_pointer_strategy() {
        let laptop = Capabilities { user_agent: None, viewport_width: 1440.0, max_touch_points: 10 };
        assert!(!laptop.prefers_touch(768.0));
        let tablet = Capabilities { viewport_width: 600.0, ..laptop };
        assert!(tablet.prefers_touch(768.0));
    }

    #[test]
    fn forced_mode_overrides_detection() {
        let phone = Capabilities { user_agent: Some("Android".into()), viewport_width: 390.0, max_touch_points: 5 };
        let mut cfg = ShowcaseConfig::default();
        assert_eq!(select_strategy(&phone, &cfg).kind(), StrategyKind::Touch);
        cfg.input = InputConfig { mode: InputMode::Pointer, ..InputConfig::default() };
        assert_eq!(select_strategy(&phone, &cfg).kind(), StrategyKind::Pointer);
    }

    #[test]
    fn touch_visibility_follows_config() {
        let mut cfg = ShowcaseConfig::default();
        assert_eq!(TouchStrategy::new(&cfg).visibility_mode().name(), "geometry-poll");
        cfg.input.touch_visibility = TouchVisibility::StickyIntersection;
        assert_eq!(TouchStrategy::new(&cfg).visibility_mode().name(), "sticky-intersection");
        assert_eq!(PointerStrategy::new(&cfg).visibility_mode().name(), "intersection");
    }

    #[test]
    fn pointer_swipe_needs_target_and_visibility() {
        let mut s = PointerStrategy::new(&ShowcaseConfig::default());
        let mut deck = Deck::new(5);
        let t0 = Instant::now();

        s.handle(&RawEvent::TouchStart { x: 300.0, y: 100.0, on_target: false }, &mut cx(&mut deck, VISIBLE, t0));
        s.handle(&RawEvent::TouchEnd { x: 200.0, y: 100.0 }, &mut cx(&mut deck, VISIBLE, t0));
        assert_eq!(deck.index(), 0);

        s.handle(&RawEvent::TouchStart { x: 300.0, y: 100.0, on_target: true }, &mut cx(&mut deck, HIDDEN, t0));
        s.handle(&RawEvent::TouchEnd { x: 200.0, y: 100.0 }, &mut cx(&mut deck, HIDDEN, t0));
        assert_eq!(deck.index(), 0);

        s.handle(&RawEvent::TouchStart { x: 300.0, y: 100.0, on_target: true }, &mut cx(&mut deck, VISIBLE, t0));
        s.handle(&RawEvent::TouchEnd { x: 200.0, y: 100.0 }, &mut cx(&mut deck, VISIBLE, t0));
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn touch_scroll_burst_commits_after_settle() {
        let mut s = TouchStrategy::new(&ShowcaseConfig::default());
        let mut deck = Deck::new(5);
        let t0 = Instant::now();

        for (i, y) in [1000.0, 1020.0, 1040.0, 1060.0].into_iter().enumerate() {
            let d = s.handle(&RawEvent::Scroll { scroll_y: y }, &mut cx(&mut deck, VISIBLE, t0 + ms(i as u64 * 16)));
            assert_eq!(d, Disposition::PassThrough);
        }
        s.tick(&mut cx(&mut deck, VISIBLE, t0 + ms(100)));
        assert_eq!(deck.index(), 0);
        s.tick(&mut cx(&mut deck, VISIBLE, t0 + ms(48 + 100)));
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn touch_scroll_outside_sticky_region_is_dropped() {
        let mut s = TouchStrategy::new(&ShowcaseConfig::default());
        let mut deck = Deck::new(5);
        let t0 = Instant::now();
        let not_pinned = Visibility { in_view: true, sticky: false };
        s.handle(&RawEvent::Scroll { scroll_y: 0.0 }, &mut cx(&mut deck, not_pinned, t0));
        s.handle(&RawEvent::Scroll { scroll_y: 200.0 }, &mut cx(&mut deck, not_pinned, t0));
        s.tick(&mut cx(&mut deck, not_pinned, t0 + ms(500)));
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn swipe_shares_throttle_with_scroll_commits() {
        let mut s = TouchStrategy::new(&ShowcaseConfig::default());
        let mut deck = Deck::new(5);
        let t0 = Instant::now();

        s.handle(&RawEvent::Scroll { scroll_y: 0.0 }, &mut cx(&mut deck, VISIBLE, t0));
        s.handle(&RawEvent::Scroll { scroll_y: 80.0 }, &mut cx(&mut deck, VISIBLE, t0));
        s.tick(&mut cx(&mut deck, VISIBLE, t0 + ms(100)));
        assert_eq!(deck.index(), 1);

        let swipe_up = |s: &mut TouchStrategy, deck: &mut Deck, at: Instant| {
            s.handle(&RawEvent::TouchStart { x: 0.0, y: 500.0, on_target: true }, &mut cx(deck, VISIBLE, at));
            s.handle(&RawEvent::TouchMove { x: 0.0, y: 420.0 }, &mut cx(deck, VISIBLE, at));
            s.handle(&RawEvent::TouchEnd { x: 0.0, y: 420.0 }, &mut cx(deck, VISIBLE, at + ms(50)));
        };

        swipe_up(&mut s, &mut deck, t0 + ms(200));
        assert_eq!(deck.index(), 1, "within 300ms of the scroll commit");
        swipe_up(&mut s, &mut deck, t0 + ms(400));
        assert_eq!(deck.index(), 2);
    }

    #[test]
    fn detach_cancels_pending_settle_timer() {
        let mut s = TouchStrategy::new(&ShowcaseConfig::default());
        let mut deck = Deck::new(5);
        let t0 = Instant::now();
        s.handle(&RawEvent::Scroll { scroll_y: 0.0 }, &mut cx(&mut deck, VISIBLE, t0));
        s.handle(&RawEvent::Scroll { scroll_y: 90.0 }, &mut cx(&mut deck, VISIBLE, t0));
        s.detach();
        s.detach();
        s.tick(&mut cx(&mut deck, VISIBLE, t0 + ms(200)));
        assert_eq!(deck.index(), 0);
    }
}
