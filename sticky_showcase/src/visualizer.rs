//! Software-rendered page using `minifb`.
//!
//! Layout of the sticky container (one viewport tall):
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  Feature No.N -          ┌──────────┐     FEATURE SHOWCASE            │
//! │  HEADING                 │  phone   │     ■ Feature 1 : ...           │
//! │  · bullet                │  image   │     □ Feature 2 : ...           │
//! │  · bullet                │          │     □ ...                       │
//! │  [<] | [>]               └──────────┘                                 │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hero spacer scrolls in above it and the trailer below; a status bar
//! stays fixed at the bottom of the window.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use feature_deck::{NavKey, ShowcaseView};

use crate::page::Page;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W:        usize = 1100;
pub const WIN_H:        usize = 700;
const STATUS_H:         i32   = 44;
const WHEEL_PX:         f32   = 40.0;

const LEFT_X:           i32   = 48;
const LEFT_W:           i32   = 380;
const PHONE_X:          i32   = 470;
const PHONE_W:          i32   = 250;
const RIGHT_X:          i32   = 770;
const RIGHT_W:          i32   = 290;
const ITEM_H:           i32   = 44;
const ITEM_GAP:         i32   = 12;
const ARROW_W:          i32   = 60;
const ARROW_H:          i32   = 44;

const BG_COLOR:         u32   = 0xFF0E0E14;
const HERO_BG:          u32   = 0xFF1A1A2E;
const TRAILER_BG:       u32   = 0xFF16213E;
const STICKY_BG:        u32   = 0xFF101018;
const TEXT_COLOR:       u32   = 0xFFEEEEEE;
const MUTED_COLOR:      u32   = 0xFF888888;
const ACCENT_COLOR:     u32   = 0xFFFFD700;
const DISABLED_COLOR:   u32   = 0xFF444444;
const STATUS_BG:        u32   = 0xFF0F3460;
const PHONE_FRAME:      u32   = 0xFF2B2B2B;

/// Per-slide placeholder tint for the phone screen.
const SCREEN_TINTS: [u32; 5] = [0xFF3A6EA5, 0xFF5E3A8C, 0xFF2E8B57, 0xFFB5651D, 0xFF8B2E4F];

// ════════════════════════════════════════════════════════════════════════════
// Input
// ════════════════════════════════════════════════════════════════════════════

/// A clickable control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Previous,
    Next,
    Item(usize),
}

/// Raw window input, already hit-tested against the last frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowInput {
    /// Positive means "scroll down".
    Wheel { delta_y: f32 },
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp   { x: f32, y: f32, target: Option<Target> },
    FocusNext,
    Activate(NavKey),
    ToggleMode,
    Quit,
}

#[derive(Clone, Copy, Debug)]
struct HitBox {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    target: Target,
}

impl HitBox {
    fn contains(&self, x: f32, y: f32) -> bool {
        let (x, y) = (x as i32, y as i32);
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:     Window,
    buf:        Vec<u32>,
    /// Controls drawn in the last frame.
    hits:       Vec<HitBox>,
    mouse_down: bool,
    mouse_pos:  (f32, f32),
}

impl Visualizer {
    pub fn new() -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            "Sticky Showcase",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf:        vec![BG_COLOR; WIN_W * WIN_H],
            hits:       Vec::new(),
            mouse_down: false,
            mouse_pos:  (0.0, 0.0),
        })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Translate this frame's keyboard and mouse state into inputs.
    pub fn poll_input(&mut self) -> Vec<WindowInput> {
        let mut out = Vec::new();
        if !self.window.is_open() {
            out.push(WindowInput::Quit);
            return out;
        }

        let pressed = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);
        if pressed(Key::Q) || pressed(Key::Escape) {
            out.push(WindowInput::Quit);
            return out;
        }
        if pressed(Key::Tab)   { out.push(WindowInput::FocusNext); }
        if pressed(Key::Enter) { out.push(WindowInput::Activate(NavKey::Enter)); }
        if pressed(Key::Space) { out.push(WindowInput::Activate(NavKey::Space)); }
        if pressed(Key::M)     { out.push(WindowInput::ToggleMode); }

        if let Some((_, wy)) = self.window.get_scroll_wheel() {
            if wy != 0.0 {
                out.push(WindowInput::Wheel { delta_y: -wy * WHEEL_PX });
            }
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            match (self.mouse_down, down) {
                (false, true) => out.push(WindowInput::PointerDown { x, y }),
                (true, true) if (x, y) != self.mouse_pos => {
                    out.push(WindowInput::PointerMove { x, y })
                }
                (true, false) => out.push(WindowInput::PointerUp { x, y, target: self.hit_test(x, y) }),
                _ => {}
            }
            self.mouse_pos = (x, y);
        }
        self.mouse_down = down;
        out
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Target> {
        self.hits.iter().find(|h| h.contains(x, y)).map(|h| h.target)
    }

    /// Render one frame.
    pub fn render(&mut self, page: &Page, view: Option<&ShowcaseView>, status: &str) -> Result<(), minifb::Error> {
        self.buf.fill(BG_COLOR);
        self.hits.clear();

        let layout = *page.layout();

        // ── Hero ──────────────────────────────────────────────────────────
        let hero_top = page.hero_top() as i32;
        self.fill_rect(0, hero_top, WIN_W as i32, layout.hero_height as i32, HERO_BG);
        self.draw_text_centered("SCROLL DOWN TO EXPLORE", hero_top + layout.hero_height as i32 / 2 - 10, 4, TEXT_COLOR);

        // ── Trailer ───────────────────────────────────────────────────────
        let trailer_top = page.trailer_top() as i32;
        self.fill_rect(0, trailer_top, WIN_W as i32, layout.trailer_height as i32, TRAILER_BG);
        self.draw_text_centered("END OF SHOWCASE", trailer_top + 60, 3, MUTED_COLOR);

        // ── Sticky container ──────────────────────────────────────────────
        // Renders nothing without a slide.
        if let Some(view) = view {
            let st = page.sticky_top() as i32;
            self.fill_rect(0, st, WIN_W as i32, layout.viewport_height as i32, STICKY_BG);
            self.draw_left_column(view, st);
            self.draw_phone(view, page.phone_top() as i32, layout.phone_height as i32);
            self.draw_feature_list(view, st);
        }

        // ── Status bar ────────────────────────────────────────────────────
        let bar_y = WIN_H as i32 - STATUS_H;
        self.fill_rect(0, bar_y, WIN_W as i32, STATUS_H, STATUS_BG);
        self.draw_text(status, 10, bar_y + 6, 2, TEXT_COLOR);
        self.draw_text(
            "wheel=scroll  drag=touch  click=select  tab/enter/space=keys  m=mode  q=quit",
            10, bar_y + 28, 2, MUTED_COLOR,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H)
    }

    // ── Sections ──────────────────────────────────────────────────────────

    fn draw_left_column(&mut self, view: &ShowcaseView, st: i32) {
        self.draw_text(&view.eyebrow, LEFT_X, st + 110, 2, MUTED_COLOR);
        self.draw_text(view.heading, LEFT_X, st + 140, 4, TEXT_COLOR);

        let cols = (LEFT_W / (4 * 2)) as usize;
        let mut y = st + 200;
        for bullet in view.bullets {
            self.fill_rect(LEFT_X, y + 3, 5, 5, ACCENT_COLOR);
            for line in wrap(bullet, cols - 2) {
                self.draw_text(&line, LEFT_X + 16, y, 2, TEXT_COLOR);
                y += 16;
            }
            y += 10;
        }

        let arrow_y = st + 560;
        self.draw_arrow(LEFT_X, arrow_y, "<", view.previous_disabled, Target::Previous);
        self.fill_rect(LEFT_X + ARROW_W + 9, arrow_y + 8, 2, ARROW_H - 16, MUTED_COLOR);
        self.draw_arrow(LEFT_X + ARROW_W + 20, arrow_y, ">", view.next_disabled, Target::Next);
    }

    fn draw_arrow(&mut self, x: i32, y: i32, glyph: &str, disabled: bool, target: Target) {
        let color = if disabled { DISABLED_COLOR } else { TEXT_COLOR };
        self.draw_border(x, y, ARROW_W, ARROW_H, color);
        self.draw_text(glyph, x + ARROW_W / 2 - 6, y + ARROW_H / 2 - 10, 4, color);
        if !disabled {
            self.hits.push(HitBox { x, y, w: ARROW_W, h: ARROW_H, target });
        }
    }

    fn draw_phone(&mut self, view: &ShowcaseView, top: i32, height: i32) {
        const BEZEL: i32 = 10;
        let tint = view
            .items
            .iter()
            .position(|i| i.current)
            .map_or(SCREEN_TINTS[0], |i| SCREEN_TINTS[i % SCREEN_TINTS.len()]);

        self.fill_rect(PHONE_X, top, PHONE_W, height, PHONE_FRAME);
        self.fill_rect(PHONE_X + BEZEL, top + BEZEL * 3, PHONE_W - BEZEL * 2, height - BEZEL * 6, tint);
        self.fill_rect(PHONE_X + PHONE_W / 2 - 20, top + BEZEL, 40, 6, 0xFF111111);

        // Image placeholder: alt text plus the source URL.
        let cols = ((PHONE_W - BEZEL * 4) / 8) as usize;
        let mut y = top + BEZEL * 3 + 20;
        self.draw_text(view.image.alt, PHONE_X + BEZEL * 2, y, 2, TEXT_COLOR);
        y += 28;
        let src = view.image.src.trim_start_matches("https://");
        for line in wrap_hard(src, cols) {
            self.draw_text(&line, PHONE_X + BEZEL * 2, y, 2, 0xFFDDDDDD);
            y += 16;
            if y > top + height - BEZEL * 4 { break; }
        }
    }

    fn draw_feature_list(&mut self, view: &ShowcaseView, st: i32) {
        self.draw_text("FEATURE SHOWCASE", RIGHT_X, st + 110, 3, TEXT_COLOR);
        let mut y = st + 160;
        for item in &view.items {
            let color = if item.current { ACCENT_COLOR } else { MUTED_COLOR };
            if item.current {
                self.fill_rect(RIGHT_X + 8, y + ITEM_H / 2 - 6, 12, 12, ACCENT_COLOR);
            } else {
                self.draw_border(RIGHT_X + 8, y + ITEM_H / 2 - 6, 12, 12, MUTED_COLOR);
            }
            self.draw_text(item.title, RIGHT_X + 32, y + ITEM_H / 2 - 5, 2, color);
            if item.focused {
                self.draw_border(RIGHT_X, y, RIGHT_W, ITEM_H, TEXT_COLOR);
            }
            self.hits.push(HitBox { x: RIGHT_X, y, w: RIGHT_W, h: ITEM_H, target: Target::Item(item.index) });
            y += ITEM_H + ITEM_GAP;
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(WIN_W as i32);
        let y1 = (y + h).min(WIN_H as i32);
        for row in y0..y1 {
            for col in x0..x1 {
                self.buf[row as usize * WIN_W + col as usize] = color;
            }
        }
    }

    fn draw_border(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w - 1, y, 1, h, color);
    }

    /// 3×5 bitmap font scaled by `scale`; one glyph cell is `4 * scale` wide.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: i32, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3 {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row as i32 * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale;
            if cx >= WIN_W as i32 { break; }
        }
    }

    fn draw_text_centered(&mut self, text: &str, y: i32, scale: i32, color: u32) {
        let width = text.chars().count() as i32 * 4 * scale;
        self.draw_text(text, (WIN_W as i32 - width) / 2, y, scale, color);
    }
}

/// Greedy word wrap to at most `cols` characters per line.
pub fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line  = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > cols {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split at exactly `cols` characters (for URLs, which have no spaces).
fn wrap_hard(text: &str, cols: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(cols.max(1)).map(|c| c.iter().collect()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

/// Digits, letters, and the punctuation used by slide text and the status
/// bar.  Lowercase renders as uppercase; anything else draws a centre dot.
fn char_glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        '?' => [0b111, 0b001, 0b011, 0b000, 0b010],
        '&' => [0b010, 0b101, 0b010, 0b101, 0b011],
        '|' => [0b010, 0b010, 0b010, 0b010, 0b010],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000],
    }
}
