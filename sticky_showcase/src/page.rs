//! A simulated scrolling page hosting the showcase.
//!
//! ```text
//!  page y
//!  0      ┌──────────────────────┐
//!         │ hero spacer (0.9 vh) │
//!  hero   ├──────────────────────┤ ─┐
//!         │ feature section      │  │ sticky container (1 vh) pins at
//!         │ (2.5 vh)             │  │ viewport top while the section
//!         │                      │  │ spans the viewport
//!         ├──────────────────────┤ ─┘
//!         │ trailer (0.6 vh)     │
//!         └──────────────────────┘
//! ```
//!
//! All `*_top` accessors return viewport (screen) coordinates.

use feature_deck::{Geometry, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    pub viewport_width:  f32,
    pub viewport_height: f32,
    pub hero_height:     f32,
    pub section_height:  f32,
    pub trailer_height:  f32,
    /// Phone frame offset inside the sticky container.
    pub phone_offset:    f32,
    pub phone_height:    f32,
}

impl PageLayout {
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let phone_height = (height * 0.72).round();
        PageLayout {
            viewport_width:  width,
            viewport_height: height,
            hero_height:     (height * 0.9).round(),
            section_height:  (height * 2.5).round(),
            trailer_height:  (height * 0.6).round(),
            phone_offset:    ((height - phone_height) / 2.0).round(),
            phone_height,
        }
    }

    pub fn total_height(&self) -> f32 {
        self.hero_height + self.section_height + self.trailer_height
    }
}

pub struct Page {
    layout:   PageLayout,
    scroll_y: f32,
}

impl Page {
    pub fn new(layout: PageLayout) -> Self {
        Page { layout, scroll_y: 0.0 }
    }

    pub fn layout(&self)   -> &PageLayout { &self.layout }
    pub fn scroll_y(&self) -> f32         { self.scroll_y }

    pub fn max_scroll(&self) -> f32 {
        (self.layout.total_height() - self.layout.viewport_height).max(0.0)
    }

    /// Native scroll.  Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, dy: f32) -> bool {
        let before    = self.scroll_y;
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll());
        self.scroll_y != before
    }

    pub fn hero_top(&self) -> f32 { -self.scroll_y }

    pub fn section_top(&self) -> f32 { self.layout.hero_height - self.scroll_y }

    pub fn section_bottom(&self) -> f32 { self.section_top() + self.layout.section_height }

    pub fn trailer_top(&self) -> f32 { self.section_bottom() }

    /// Screen y of the sticky container: scrolls in normally, sticks at 0,
    /// then leaves with the bottom of its section.
    pub fn sticky_top(&self) -> f32 {
        let top = self.section_top();
        if top > 0.0 {
            top
        } else {
            (self.section_bottom() - self.layout.viewport_height).min(0.0)
        }
    }

    pub fn sticky_contains(&self, y: f32) -> bool {
        let top = self.sticky_top();
        y >= top && y < top + self.layout.viewport_height
    }

    pub fn phone_top(&self) -> f32 { self.sticky_top() + self.layout.phone_offset }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            element:         Rect::new(self.phone_top(), self.layout.phone_height),
            section:         Rect::new(self.section_top(), self.layout.section_height),
            viewport_width:  self.layout.viewport_width,
            viewport_height: self.layout.viewport_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page { Page::new(PageLayout::for_viewport(1100.0, 700.0)) }

    #[test]
    fn layout_proportions() {
        let l = PageLayout::for_viewport(1100.0, 700.0);
        assert_eq!(l.hero_height, 630.0);
        assert_eq!(l.section_height, 1750.0);
        assert_eq!(l.trailer_height, 420.0);
        assert_eq!(l.phone_height, 504.0);
        assert_eq!(l.phone_offset, 98.0);
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let mut p = page();
        assert!(!p.scroll_by(-50.0));
        assert!(p.scroll_by(1e6));
        assert_eq!(p.scroll_y(), p.max_scroll());
        assert_eq!(p.max_scroll(), 630.0 + 1750.0 + 420.0 - 700.0);
    }

    #[test]
    fn sticky_container_scrolls_in_pins_then_leaves() {
        let mut p = page();
        assert_eq!(p.sticky_top(), 630.0);
        p.scroll_by(630.0);
        assert_eq!(p.sticky_top(), 0.0);
        assert!(p.geometry().sticky_active());
        p.scroll_by(1000.0);
        assert_eq!(p.sticky_top(), 0.0);
        p.scroll_by(100.0);
        assert_eq!(p.sticky_top(), -50.0);
        assert!(!p.geometry().sticky_active());
    }

    #[test]
    fn phone_is_fully_visible_while_pinned() {
        let mut p = page();
        assert!(!p.geometry().fully_visible());
        p.scroll_by(900.0);
        let g = p.geometry();
        assert!(g.fully_visible());
        assert_eq!(g.element.top, 98.0);
    }

    #[test]
    fn sticky_hit_region_follows_container() {
        let mut p = page();
        assert!(!p.sticky_contains(100.0));
        assert!(p.sticky_contains(650.0));
        p.scroll_by(700.0);
        assert!(p.sticky_contains(100.0));
    }
}
