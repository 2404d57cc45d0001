//! # feature_deck
//!
//! A scroll-pinned feature showcase: five slides that advance while the
//! section is the user's scroll focus, driven by wheel, scroll, and touch
//! gestures.
//!
//! The crate is host-agnostic.  A host (browser glue, a native window, a
//! test) feeds [`RawEvent`]s plus a [`Geometry`] snapshot into a
//! [`Showcase`] and honours the returned [`Disposition`].
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Strategy | Action |
//! |---|---|---|
//! | Wheel down / up | Pointer | Next / previous; one per 250ms; released at the ends |
//! | Horizontal swipe left / right (> 40px) | Pointer | Next / previous |
//! | Scroll burst, settled for 100ms | Touch | One step toward the burst direction; one per 400ms |
//! | Vertical swipe up / down (> 60px, or > 30px within 300ms) | Touch | Next / previous; one per 300ms |
//! | Previous / next button | Both | Step, disabled at the ends |
//! | List item click, Enter, Space | Both | Jump straight to that slide |
//!
//! Every gesture is ignored while the showcase is out of view.

pub mod accumulate;
pub mod config;
pub mod deck;
pub mod event;
pub mod feature;
pub mod input;
pub mod showcase;
pub mod swipe;
pub mod timer;
pub mod visibility;
pub mod wheel;

pub use config::{ConfigError, ConfigSource, InputMode, ShowcaseConfig, TouchVisibility};
pub use deck::Deck;
pub use event::{Disposition, EventMask, RawEvent};
pub use feature::{Feature, FEATURES, IMAGE_ALT};
pub use input::{Capabilities, InputStrategy, StrategyKind};
pub use showcase::{ImageView, NavItem, NavKey, Showcase, ShowcaseView};
pub use visibility::{Geometry, Rect, Visibility, VisibilityMode};
