//! # sticky_showcase
//!
//! Native host for the [`feature_deck`] showcase.  A simulated page (hero,
//! sticky feature section, trailer) scrolls inside a software framebuffer
//! window; mouse and keyboard input is translated into the platform events
//! the showcase listens to.
//!
//! ## Input modes
//!
//! * **Pointer**: the mouse wheel is a wheel; a horizontal mouse drag on
//!   the pinned section is a horizontal swipe.
//! * **Touch**: a vertical mouse drag scrolls the page like a finger
//!   would, feeding both the scroll accumulator and the vertical swipe.
//!
//! The mode is chosen by capability detection at start-up and can be
//! forced with `--pointer` / `--touch` or toggled at runtime.
//!
//! ### Keyboard shortcuts
//!
//! | Key | Action |
//! |---|---|
//! | Mouse wheel | Scroll the page / step slides while pinned |
//! | Click `<` / `>` | Previous / next slide |
//! | Click list item | Jump to that slide |
//! | `Tab` | Move focus through the feature list |
//! | `Enter` / `Space` | Activate the focused item |
//! | `M` | Toggle pointer / touch mode |
//! | `Q` / `Escape` | Quit |

pub mod page;
pub mod visualizer;
pub mod app;
