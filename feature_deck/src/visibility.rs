//! Viewport visibility tracking.
//!
//! Answers "is the showcase the user's current scroll focus?".  Three modes
//! cover the signals that are reliable on different devices:
//!
//! | Mode | Recomputed on | In view when |
//! |---|---|---|
//! | `Intersection` | scroll, resize, orientation | intersection ratio > 0 and ≥ threshold |
//! | `GeometryPoll` | scroll, resize, orientation, long touch move | `top ≥ 0 && bottom ≤ viewport height` |
//! | `StickyIntersection` | scroll, resize, orientation | ratio against a bottom-shrunk viewport ≥ minimum, reported on threshold crossings |
//!
//! Independently of the mode, the tracker reports whether the sticky
//! section is currently pinned (its box spans the whole viewport).

use crate::config::VisibilityConfig;
use crate::event::{EventMask, RawEvent};

/// Vertical extent in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top:    f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(top: f32, height: f32) -> Self {
        Rect { top, bottom: top + height }
    }

    pub fn height(&self) -> f32 { (self.bottom - self.top).max(0.0) }

    /// Length of the overlap with `[lo, hi]`.
    pub fn overlap(&self, lo: f32, hi: f32) -> f32 {
        (self.bottom.min(hi) - self.top.max(lo)).max(0.0)
    }
}

/// Snapshot of the layout the tracker reasons about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// The tracked element (the phone frame).
    pub element:         Rect,
    /// The tall section the sticky container pins inside.
    pub section:         Rect,
    pub viewport_width:  f32,
    pub viewport_height: f32,
}

impl Geometry {
    /// Visible fraction of the element inside `[0, viewport_height - bottom_cut]`.
    pub fn intersection_ratio(&self, bottom_cut: f32) -> f32 {
        let h = self.element.height();
        if h <= 0.0 {
            return 0.0;
        }
        let hi = (self.viewport_height - bottom_cut).max(0.0);
        (self.element.overlap(0.0, hi) / h).clamp(0.0, 1.0)
    }

    pub fn fully_visible(&self) -> bool {
        self.element.top >= 0.0 && self.element.bottom <= self.viewport_height
    }

    /// The section box covers the viewport, so its sticky child is pinned.
    pub fn sticky_active(&self) -> bool {
        self.section.top <= 0.0 && self.section.bottom >= self.viewport_height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VisibilityMode {
    Intersection { threshold: f32 },
    GeometryPoll { move_threshold: f32 },
    StickyIntersection {
        thresholds:    Vec<f32>,
        /// Fraction of viewport height removed from the bottom edge.
        bottom_margin: f32,
        min_ratio:     f32,
    },
}

impl VisibilityMode {
    pub fn intersection(cfg: &VisibilityConfig) -> Self {
        VisibilityMode::Intersection { threshold: cfg.intersection_threshold }
    }

    pub fn geometry_poll(cfg: &VisibilityConfig) -> Self {
        VisibilityMode::GeometryPoll { move_threshold: cfg.poll_move_threshold }
    }

    pub fn sticky_intersection(cfg: &VisibilityConfig) -> Self {
        VisibilityMode::StickyIntersection {
            thresholds:    cfg.sticky_thresholds.clone(),
            bottom_margin: cfg.sticky_bottom_margin,
            min_ratio:     cfg.sticky_min_ratio,
        }
    }

    /// Events that cause a recomputation.
    pub fn triggers(&self) -> EventMask {
        match self {
            VisibilityMode::GeometryPoll { .. } => {
                EventMask::GEOMETRY | EventMask::TOUCH_START | EventMask::TOUCH_MOVE
            }
            _ => EventMask::GEOMETRY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VisibilityMode::Intersection { .. }       => "intersection",
            VisibilityMode::GeometryPoll { .. }       => "geometry-poll",
            VisibilityMode::StickyIntersection { .. } => "sticky-intersection",
        }
    }
}

/// Tracker output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub in_view: bool,
    pub sticky:  bool,
}

pub struct VisibilityTracker {
    mode:          VisibilityMode,
    state:         Visibility,
    /// Threshold bucket last reported (sticky-intersection only).
    bucket:        Option<usize>,
    touch_start_y: f32,
}

impl VisibilityTracker {
    pub fn new(mode: VisibilityMode) -> Self {
        VisibilityTracker { mode, state: Visibility::default(), bucket: None, touch_start_y: 0.0 }
    }

    pub fn mode(&self)  -> &VisibilityMode { &self.mode }
    pub fn state(&self) -> Visibility      { self.state }

    /// Forget everything (teardown).
    pub fn reset(&mut self) {
        self.state  = Visibility::default();
        self.bucket = None;
    }

    /// Feed an event.  Returns `true` when the in-view flag flipped.
    pub fn on_event(&mut self, event: &RawEvent, geometry: Option<&Geometry>) -> bool {
        if !self.mode.triggers().contains(event.kind()) {
            return false;
        }
        let move_threshold = match self.mode {
            VisibilityMode::GeometryPoll { move_threshold } => move_threshold,
            _ => 0.0,
        };
        match *event {
            RawEvent::TouchStart { y, .. } => {
                self.touch_start_y = y;
                false
            }
            RawEvent::TouchMove { y, .. } => {
                if (y - self.touch_start_y).abs() > move_threshold {
                    self.observe(geometry)
                } else {
                    false
                }
            }
            _ => self.observe(geometry),
        }
    }

    /// Recompute from `geometry`.  A missing element is never in view.
    /// Returns `true` when the in-view flag flipped.
    pub fn observe(&mut self, geometry: Option<&Geometry>) -> bool {
        let before = self.state.in_view;
        let Some(g) = geometry else {
            self.reset();
            return before;
        };

        self.state.sticky = g.sticky_active();
        match &self.mode {
            VisibilityMode::Intersection { threshold } => {
                // Touching edges is not an intersection, even at threshold 0.
                let ratio = g.intersection_ratio(0.0);
                self.state.in_view = ratio > 0.0 && ratio >= *threshold;
            }
            VisibilityMode::GeometryPoll { .. } => {
                self.state.in_view = g.fully_visible();
            }
            VisibilityMode::StickyIntersection { thresholds, bottom_margin, min_ratio } => {
                let ratio  = g.intersection_ratio(g.viewport_height * bottom_margin);
                let bucket = thresholds.iter().filter(|t| ratio >= **t).count();
                // Observers only call back when a threshold is crossed.
                if self.bucket != Some(bucket) {
                    self.bucket = Some(bucket);
                    self.state.in_view = ratio >= *min_ratio;
                }
            }
        }

        let changed = before != self.state.in_view;
        if changed {
            tracing::debug!(
                mode = self.mode.name(),
                in_view = self.state.in_view,
                sticky = self.state.sticky,
                "visibility changed"
            );
        }
        changed
    }
}
