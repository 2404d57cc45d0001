//! Top-level application state.
//!
//! `AppState` owns the simulated [`Page`] and the [`Showcase`].  It plays
//! the part of the browser: turns window input into platform events, asks
//! the showcase what to do with them, and scrolls the page when the
//! showcase lets an event through.

use std::time::Instant;

use thiserror::Error;

use feature_deck::{
    Capabilities, ConfigError, Disposition, InputMode, RawEvent, Showcase, ShowcaseConfig,
    StrategyKind, FEATURES,
};

use crate::page::{Page, PageLayout};
use crate::visualizer::{Target, Visualizer, WindowInput, WIN_H, WIN_W};

/// Pointer travel (px) below which a press/release counts as a click.
const TAP_SLOP: f32 = 8.0;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig / AppError
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub showcase:     ShowcaseConfig,
    /// Reported to capability detection as the browser user agent.
    pub user_agent:   Option<String>,
    pub touch_points: u32,
}

impl AppConfig {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            user_agent:       self.user_agent.clone(),
            viewport_width:   WIN_W as f32,
            max_touch_points: self.touch_points,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
struct PointerTrack {
    origin:  (f32, f32),
    last_y:  f32,
    dragged: bool,
}

pub struct AppState {
    page:     Page,
    showcase: Showcase,
    config:   AppConfig,
    pointer:  Option<PointerTrack>,
    pub status: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let page     = Page::new(PageLayout::for_viewport(WIN_W as f32, WIN_H as f32));
        let mut showcase = Showcase::new(&FEATURES, config.showcase.clone());
        showcase.mount(&config.capabilities(), Some(&page.geometry()));

        let mut app = AppState { page, showcase, config, pointer: None, status: String::new() };
        app.dispatch(&RawEvent::Resize, Instant::now());
        app.refresh_status();
        app
    }

    pub fn page(&self)     -> &Page     { &self.page }
    pub fn showcase(&self) -> &Showcase { &self.showcase }

    // ── process one WindowInput ──────────────────────────────────────────

    /// Returns `false` when the application should quit.
    pub fn handle_input(&mut self, input: WindowInput, now: Instant) -> bool {
        match input {
            WindowInput::Quit => return false,

            WindowInput::Wheel { delta_y } => {
                let d = self.dispatch(&RawEvent::Wheel { delta_y }, now);
                if !d.prevents_default() {
                    self.scroll_page(delta_y, now);
                }
            }

            WindowInput::PointerDown { x, y } => {
                self.pointer = Some(PointerTrack { origin: (x, y), last_y: y, dragged: false });
                let on_target = self.page.sticky_contains(y);
                self.dispatch(&RawEvent::TouchStart { x, y, on_target }, now);
            }

            WindowInput::PointerMove { x, y } => {
                let Some(mut track) = self.pointer else { return true };
                let (ox, oy) = track.origin;
                if (x - ox).abs() > TAP_SLOP || (y - oy).abs() > TAP_SLOP {
                    track.dragged = true;
                }
                let dy = track.last_y - y;
                track.last_y = y;
                self.pointer = Some(track);

                self.dispatch(&RawEvent::TouchMove { x, y }, now);
                // Dragging a touch screen scrolls the page natively.
                if self.showcase.strategy_kind() == Some(StrategyKind::Touch) {
                    self.scroll_page(dy, now);
                }
            }

            WindowInput::PointerUp { x, y, target } => {
                let Some(track) = self.pointer.take() else { return true };
                self.dispatch(&RawEvent::TouchEnd { x, y }, now);
                if !track.dragged {
                    if let Some(target) = target {
                        self.click(target);
                    }
                }
            }

            WindowInput::FocusNext => {
                self.showcase.focus_next();
            }

            WindowInput::Activate(key) => {
                self.showcase.activate_focused(key);
            }

            WindowInput::ToggleMode => self.toggle_mode(now),
        }
        true
    }

    pub fn click(&mut self, target: Target) {
        match target {
            Target::Previous => { self.showcase.previous(); }
            Target::Next     => { self.showcase.next(); }
            Target::Item(k)  => { self.showcase.select(k); }
        }
    }

    // ── Per-frame tick ────────────────────────────────────────────────────

    pub fn tick(&mut self, now: Instant) {
        self.showcase.tick(now);
        self.refresh_status();
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn dispatch(&mut self, event: &RawEvent, now: Instant) -> Disposition {
        let geometry = self.page.geometry();
        self.showcase.dispatch(event, Some(&geometry), now)
    }

    fn scroll_page(&mut self, dy: f32, now: Instant) {
        if self.page.scroll_by(dy) {
            let scroll_y = self.page.scroll_y();
            self.dispatch(&RawEvent::Scroll { scroll_y }, now);
        }
    }

    /// Swap between pointer and touch strategies by remounting.
    fn toggle_mode(&mut self, now: Instant) {
        let next = match self.showcase.strategy_kind() {
            Some(StrategyKind::Touch) => InputMode::Pointer,
            _                         => InputMode::Touch,
        };
        self.config.showcase.input.mode = next;

        let index = self.showcase.active_index();
        self.showcase.unmount();
        self.showcase = Showcase::new(&FEATURES, self.config.showcase.clone());
        self.showcase.go(index as isize);
        self.showcase.mount(&self.config.capabilities(), Some(&self.page.geometry()));
        let scroll_y = self.page.scroll_y();
        self.dispatch(&RawEvent::Scroll { scroll_y }, now);
        tracing::info!(mode = ?next, "input mode toggled");
    }

    fn refresh_status(&mut self) {
        let strategy = self.showcase.strategy_kind().map_or("unmounted", StrategyKind::name);
        let vis      = self.showcase.visibility();
        self.status = format!(
            "{}  |  {}  |  {}  |  slide {}/{}  |  scroll {:.0}",
            strategy,
            if vis.in_view { "in view" } else { "out of view" },
            if vis.sticky { "pinned" } else { "free" },
            self.showcase.active_index() + 1,
            self.showcase.features().len(),
            self.page.scroll_y(),
        );
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run(): main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Open the window and drive the event/render loop at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    let mut vis = Visualizer::new()?;
    let mut app = AppState::new(cfg);

    while vis.is_open() {
        let now = Instant::now();

        // 1. Window input → platform events
        for input in vis.poll_input() {
            if !app.handle_input(input, now) {
                return Ok(());
            }
        }

        // 2. Timers
        app.tick(now);

        // 3. Render
        let view = app.showcase().view();
        vis.render(app.page(), view.as_ref(), &app.status)?;
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
