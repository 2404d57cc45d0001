//! `Showcase`: the sticky feature showcase component.
//!
//! Owns the [`Deck`] and, while mounted, the input strategy and visibility
//! tracker chosen for the device.  The host drives it through a small
//! lifecycle:
//!
//! ```text
//! mount(caps, geometry) ─► dispatch(event, geometry, now)* ─► unmount()
//!                           tick(now) once per frame
//! ```
//!
//! Navigation controls (`previous`, `next`, `select`, `activate`) work
//! whether or not the component is mounted; gestures only while mounted.

use std::time::Instant;

use crate::config::ShowcaseConfig;
use crate::deck::Deck;
use crate::event::{Disposition, EventMask, RawEvent};
use crate::feature::{Feature, FEATURES, IMAGE_ALT};
use crate::input::{select_strategy, Capabilities, GestureContext, InputStrategy, StrategyKind};
use crate::visibility::{Geometry, Visibility, VisibilityTracker};

/// Keys that can activate a focused list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    Other,
}

// ════════════════════════════════════════════════════════════════════════════
// View model
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageView {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub index:   usize,
    pub title:   &'static str,
    /// Rendered as `aria-current`.
    pub current: bool,
    pub focused: bool,
}

/// Everything needed to draw the current slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseView {
    pub eyebrow:           String,
    pub heading:           &'static str,
    pub bullets:           &'static [&'static str],
    pub image:             ImageView,
    pub previous_disabled: bool,
    pub next_disabled:     bool,
    pub items:             Vec<NavItem>,
}

// ════════════════════════════════════════════════════════════════════════════
// Showcase
// ════════════════════════════════════════════════════════════════════════════

struct Mounted {
    strategy:  Box<dyn InputStrategy>,
    tracker:   VisibilityTracker,
    listeners: EventMask,
}

pub struct Showcase {
    features: &'static [Feature],
    config:   ShowcaseConfig,
    deck:     Deck,
    focus:    Option<usize>,
    mounted:  Option<Mounted>,
}

impl Default for Showcase {
    fn default() -> Self {
        Showcase::new(&FEATURES, ShowcaseConfig::default())
    }
}

impl Showcase {
    pub fn new(features: &'static [Feature], config: ShowcaseConfig) -> Self {
        Showcase {
            features,
            config,
            deck:    Deck::new(features.len()),
            focus:   None,
            mounted: None,
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Select a strategy for `caps`, register its listeners, and take the
    /// first visibility reading.  Without a tracked element (`None`) nothing
    /// is attached and `false` is returned.
    pub fn mount(&mut self, caps: &Capabilities, geometry: Option<&Geometry>) -> bool {
        self.unmount();
        if geometry.is_none() {
            tracing::warn!("showcase element missing; listeners not attached");
            return false;
        }

        let mut strategy = select_strategy(caps, &self.config);
        let mut tracker  = VisibilityTracker::new(strategy.visibility_mode());
        let listeners    = strategy.attach() | tracker.mode().triggers();
        tracker.observe(geometry);

        tracing::info!(
            strategy = strategy.kind().name(),
            visibility = tracker.mode().name(),
            in_view = tracker.state().in_view,
            "showcase mounted"
        );
        self.mounted = Some(Mounted { strategy, tracker, listeners });
        true
    }

    /// Detach every listener and cancel pending timers.  Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mut m) = self.mounted.take() {
            m.strategy.detach();
            m.tracker.reset();
            tracing::info!(strategy = m.strategy.kind().name(), "showcase unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool { self.mounted.is_some() }

    pub fn strategy_kind(&self) -> Option<StrategyKind> {
        self.mounted.as_ref().map(|m| m.strategy.kind())
    }

    /// Registered listeners; empty when unmounted.
    pub fn listeners(&self) -> EventMask {
        self.mounted.as_ref().map_or(EventMask::empty(), |m| m.listeners)
    }

    pub fn visibility(&self) -> Visibility {
        self.mounted.as_ref().map_or(Visibility::default(), |m| m.tracker.state())
    }

    pub fn in_view(&self) -> bool { self.visibility().in_view }

    // ── events ────────────────────────────────────────────────────────────

    /// Route one platform event.  The returned disposition tells the host
    /// whether to cancel the event's default action.
    pub fn dispatch(&mut self, event: &RawEvent, geometry: Option<&Geometry>, now: Instant) -> Disposition {
        let Some(m) = self.mounted.as_mut() else {
            return Disposition::Ignored;
        };
        if !m.listeners.contains(event.kind()) {
            return Disposition::Ignored;
        }

        m.tracker.on_event(event, geometry);
        let mut cx = GestureContext { deck: &mut self.deck, visibility: m.tracker.state(), now };
        m.strategy.handle(event, &mut cx)
    }

    /// Fire due settle timers.
    pub fn tick(&mut self, now: Instant) {
        if let Some(m) = self.mounted.as_mut() {
            let mut cx = GestureContext { deck: &mut self.deck, visibility: m.tracker.state(), now };
            m.strategy.tick(&mut cx);
        }
    }

    // ── navigation surface ────────────────────────────────────────────────

    pub fn active_index(&self) -> usize { self.deck.index() }

    pub fn active_feature(&self) -> Option<&'static Feature> {
        self.features.get(self.deck.index())
    }

    pub fn features(&self) -> &'static [Feature] { self.features }

    pub fn can_previous(&self) -> bool { !self.deck.is_empty() && !self.deck.at_start() }
    pub fn can_next(&self)     -> bool { !self.deck.is_empty() && !self.deck.at_end() }

    /// Clamped move; the single mutation point behind every control.
    pub fn go(&mut self, delta: isize) -> bool {
        let moved = self.deck.go(delta);
        if moved {
            tracing::debug!(index = self.deck.index(), delta, "slide selected");
        }
        moved
    }

    /// Previous button.  Disabled (no-op) on the first slide.
    pub fn previous(&mut self) -> bool {
        self.can_previous() && self.go(-1)
    }

    /// Next button.  Disabled (no-op) on the last slide.
    pub fn next(&mut self) -> bool {
        self.can_next() && self.go(1)
    }

    /// Click on list item `k`: a single jump.
    pub fn select(&mut self, k: usize) -> bool {
        if k >= self.deck.len() {
            return false;
        }
        self.focus = Some(k);
        self.go(k as isize - self.deck.index() as isize)
    }

    /// Keyboard activation of item `k`; Enter and Space behave like a click.
    pub fn activate(&mut self, k: usize, key: NavKey) -> bool {
        match key {
            NavKey::Enter | NavKey::Space => self.select(k),
            NavKey::Other => false,
        }
    }

    pub fn focused(&self) -> Option<usize> { self.focus }

    /// Move keyboard focus to the next list item, wrapping around.
    pub fn focus_next(&mut self) -> Option<usize> {
        let len = self.deck.len();
        if len == 0 {
            return None;
        }
        self.focus = Some(self.focus.map_or(0, |f| (f + 1) % len));
        self.focus
    }

    pub fn activate_focused(&mut self, key: NavKey) -> bool {
        match self.focus {
            Some(k) => self.activate(k, key),
            None    => false,
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// View of the active slide; `None` only for an empty feature list.
    pub fn view(&self) -> Option<ShowcaseView> {
        let active = self.active_feature()?;
        let items = self
            .features
            .iter()
            .enumerate()
            .map(|(i, f)| NavItem {
                index:   i,
                title:   f.title,
                current: i == self.deck.index(),
                focused: self.focus == Some(i),
            })
            .collect();

        Some(ShowcaseView {
            eyebrow:           format!("Feature No.{} -", active.id),
            heading:           active.heading,
            bullets:           active.bullets,
            image:             ImageView { src: active.image, alt: IMAGE_ALT },
            previous_disabled: !self.can_previous(),
            next_disabled:     !self.can_next(),
            items,
        })
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        self.unmount();
    }
}
