//! Raw platform events and listener masks.

use bitflags::bitflags;

bitflags! {
    /// Set of raw event kinds a listener is registered for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        const WHEEL       = 1 << 0;
        const SCROLL      = 1 << 1;
        const RESIZE      = 1 << 2;
        const ORIENTATION = 1 << 3;
        const TOUCH_START = 1 << 4;
        const TOUCH_MOVE  = 1 << 5;
        const TOUCH_END   = 1 << 6;

        const TOUCH    = Self::TOUCH_START.bits() | Self::TOUCH_MOVE.bits() | Self::TOUCH_END.bits();
        const GEOMETRY = Self::SCROLL.bits() | Self::RESIZE.bits() | Self::ORIENTATION.bits();
    }
}

/// An input event as the platform delivers it.  Coordinates are viewport
/// pixels; `delta_y > 0` and growing `scroll_y` both mean "scrolling down".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent {
    Wheel { delta_y: f32 },
    /// Window scrolled; carries the new absolute offset.
    Scroll { scroll_y: f32 },
    Resize,
    OrientationChange,
    /// `on_target` is true when the touch began inside the sticky container.
    TouchStart { x: f32, y: f32, on_target: bool },
    TouchMove  { x: f32, y: f32 },
    TouchEnd   { x: f32, y: f32 },
}

impl RawEvent {
    pub fn kind(&self) -> EventMask {
        match self {
            RawEvent::Wheel { .. }      => EventMask::WHEEL,
            RawEvent::Scroll { .. }     => EventMask::SCROLL,
            RawEvent::Resize            => EventMask::RESIZE,
            RawEvent::OrientationChange => EventMask::ORIENTATION,
            RawEvent::TouchStart { .. } => EventMask::TOUCH_START,
            RawEvent::TouchMove { .. }  => EventMask::TOUCH_MOVE,
            RawEvent::TouchEnd { .. }   => EventMask::TOUCH_END,
        }
    }
}

/// What the platform should do with an event after the showcase saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// No listener registered for this kind.
    Ignored,
    /// Handled (or not), but the default action proceeds: the page scrolls.
    PassThrough,
    /// Default action cancelled; the page must not scroll.
    Consumed,
}

impl Disposition {
    pub fn prevents_default(self) -> bool { self == Disposition::Consumed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_single_bits() {
        let events = [
            RawEvent::Wheel { delta_y: 1.0 },
            RawEvent::Scroll { scroll_y: 0.0 },
            RawEvent::Resize,
            RawEvent::OrientationChange,
            RawEvent::TouchStart { x: 0.0, y: 0.0, on_target: true },
            RawEvent::TouchMove { x: 0.0, y: 0.0 },
            RawEvent::TouchEnd { x: 0.0, y: 0.0 },
        ];
        let mut seen = EventMask::empty();
        for e in events {
            assert_eq!(e.kind().bits().count_ones(), 1);
            assert!(!seen.intersects(e.kind()));
            seen |= e.kind();
        }
        assert_eq!(seen, EventMask::all());
    }

    #[test]
    fn only_consumed_prevents_default() {
        assert!(Disposition::Consumed.prevents_default());
        assert!(!Disposition::PassThrough.prevents_default());
        assert!(!Disposition::Ignored.prevents_default());
    }
}
