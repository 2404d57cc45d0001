//! Touch swipe recognition.
//!
//! Both recognisers judge a gesture once, at touch end, and return the
//! deck step it implies.  Gating on visibility and throttling belong to the
//! strategy that owns them.

use std::time::{Duration, Instant};

use crate::config::SwipeConfig;

// ════════════════════════════════════════════════════════════════════════════
// HorizontalSwipe (pointer strategy: tablets, touch laptops)
// ════════════════════════════════════════════════════════════════════════════

/// Left swipe → next, right swipe → previous.  Only counts when the motion
/// is mostly horizontal, so vertical page scrolling is left alone.
pub struct HorizontalSwipe {
    min_distance: f32,
    start:        Option<(f32, f32)>,
}

impl HorizontalSwipe {
    pub fn new(cfg: &SwipeConfig) -> Self {
        HorizontalSwipe { min_distance: cfg.horizontal_distance, start: None }
    }

    pub fn start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub fn end(&mut self, x: f32, y: f32) -> Option<isize> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;
        if dx.abs() > dy.abs() && dx.abs() > self.min_distance {
            Some(if dx < 0.0 { 1 } else { -1 })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) { self.start = None; }
}

// ════════════════════════════════════════════════════════════════════════════
// VerticalSwipe (touch strategy: phones)
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
struct TouchOrigin {
    y:  f32,
    at: Instant,
}

/// Upward swipe → next, downward → previous.
///
/// A touch becomes a swipe once it has moved more than `move_threshold`
/// vertically.  At touch end it must be long (`|dy| > long_distance`) or a
/// quick flick (`|dy| > flick_distance` within `flick_window`).
pub struct VerticalSwipe {
    move_threshold: f32,
    long_distance:  f32,
    flick_distance: f32,
    flick_window:   Duration,
    origin:         Option<TouchOrigin>,
    swiping:        bool,
}

impl VerticalSwipe {
    pub fn new(cfg: &SwipeConfig) -> Self {
        VerticalSwipe {
            move_threshold: cfg.move_threshold,
            long_distance:  cfg.long_distance,
            flick_distance: cfg.flick_distance,
            flick_window:   cfg.flick_window(),
            origin:         None,
            swiping:        false,
        }
    }

    pub fn is_swiping(&self) -> bool { self.swiping }

    pub fn start(&mut self, y: f32, now: Instant) {
        self.origin  = Some(TouchOrigin { y, at: now });
        self.swiping = false;
    }

    pub fn moved(&mut self, y: f32) {
        if let Some(o) = self.origin {
            if (y - o.y).abs() > self.move_threshold {
                self.swiping = true;
            }
        }
    }

    pub fn end(&mut self, y: f32, now: Instant) -> Option<isize> {
        let origin  = self.origin.take()?;
        let swiping = std::mem::take(&mut self.swiping);
        if !swiping {
            return None;
        }

        let dy      = y - origin.y;
        let elapsed = now.saturating_duration_since(origin.at);
        let long    = dy.abs() > self.long_distance;
        let flick   = dy.abs() > self.flick_distance && elapsed < self.flick_window;
        if !(long || flick) {
            return None;
        }
        // Finger moving up (dy < 0) pulls the next slide in.
        Some(if dy < 0.0 { 1 } else { -1 })
    }

    pub fn cancel(&mut self) {
        self.origin  = None;
        self.swiping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn vertical_swipe(v: &mut VerticalSwipe, from: f32, to: f32, took: Duration) -> Option<isize> {
        let t0 = Instant::now();
        v.start(from, t0);
        v.moved((from + to) / 2.0);
        v.moved(to);
        v.end(to, t0 + took)
    }

    #[test]
    fn horizontal_left_is_next_right_is_previous() {
        let mut h = HorizontalSwipe::new(&SwipeConfig::default());
        h.start(300.0, 200.0);
        assert_eq!(h.end(250.0, 210.0), Some(1));
        h.start(300.0, 200.0);
        assert_eq!(h.end(350.0, 190.0), Some(-1));
    }

    #[test]
    fn horizontal_ignores_short_or_diagonal_motion() {
        let mut h = HorizontalSwipe::new(&SwipeConfig::default());
        h.start(300.0, 200.0);
        assert_eq!(h.end(265.0, 200.0), None);
        h.start(300.0, 200.0);
        assert_eq!(h.end(240.0, 280.0), None);
    }

    #[test]
    fn horizontal_end_without_start_is_ignored() {
        let mut h = HorizontalSwipe::new(&SwipeConfig::default());
        assert_eq!(h.end(0.0, 0.0), None);
    }

    #[test]
    fn sixty_one_pixel_swipe_commits() {
        let mut v = VerticalSwipe::new(&SwipeConfig::default());
        assert_eq!(vertical_swipe(&mut v, 400.0, 339.0, ms(900)), Some(1));
    }

    #[test]
    fn fifty_nine_pixel_slow_swipe_is_ignored() {
        let mut v = VerticalSwipe::new(&SwipeConfig::default());
        assert_eq!(vertical_swipe(&mut v, 400.0, 341.0, ms(400)), None);
    }

    #[test]
    fn short_fast_flick_commits() {
        let mut v = VerticalSwipe::new(&SwipeConfig::default());
        assert_eq!(vertical_swipe(&mut v, 400.0, 435.0, ms(150)), Some(-1));
    }

    #[test]
    fn touch_without_swipe_movement_is_a_tap() {
        let mut v = VerticalSwipe::new(&SwipeConfig::default());
        let t0 = Instant::now();
        v.start(400.0, t0);
        v.moved(405.0);
        assert!(!v.is_swiping());
        // Jump straight to a far end point without a qualifying move.
        assert_eq!(v.end(300.0, t0 + ms(50)), None);
    }

    #[test]
    fn state_resets_between_gestures() {
        let mut v = VerticalSwipe::new(&SwipeConfig::default());
        vertical_swipe(&mut v, 400.0, 300.0, ms(100));
        assert!(!v.is_swiping());
        assert_eq!(v.end(0.0, Instant::now()), None);
    }
}
