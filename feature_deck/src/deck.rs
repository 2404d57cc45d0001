//! `Deck`: the active slide index and its single mutation primitive.
//!
//! Every navigation path (buttons, list clicks, keyboard, wheel, scroll,
//! swipe) ends in [`Deck::go`], which clamps into `[0, len-1]` and never
//! wraps.

/// Active-index state over `len` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deck {
    index: usize,
    len:   usize,
}

impl Deck {
    /// A deck positioned on the first slide.
    pub fn new(len: usize) -> Self {
        Deck { index: 0, len }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn len(&self)   -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Highest valid index (0 for an empty deck).
    pub fn last(&self) -> usize { self.len.saturating_sub(1) }

    pub fn at_start(&self) -> bool { self.index == 0 }
    pub fn at_end(&self)   -> bool { self.index == self.last() }

    /// Move by `delta` slides, clamping at either end.
    ///
    /// Returns `true` when the index actually changed.
    pub fn go(&mut self, delta: isize) -> bool {
        let last   = self.last() as isize;
        let target = (self.index as isize).saturating_add(delta).clamp(0, last) as usize;
        let moved  = target != self.index;
        self.index = target;
        moved
    }

    /// Jump straight to `k`, expressed as a single `go(k - index)`.
    pub fn select(&mut self, k: usize) -> bool {
        let delta = (k as isize).saturating_sub(self.index as isize);
        self.go(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        let d = Deck::new(5);
        assert_eq!(d.index(), 0);
        assert!(d.at_start());
        assert!(!d.at_end());
    }

    #[test]
    fn go_zero_is_a_no_op() {
        let mut d = Deck::new(5);
        d.go(2);
        assert!(!d.go(0));
        assert_eq!(d.index(), 2);
    }

    #[test]
    fn go_clamps_instead_of_wrapping() {
        let mut d = Deck::new(5);
        assert!(!d.go(-1));
        assert_eq!(d.index(), 0);
        assert!(d.go(100));
        assert_eq!(d.index(), 4);
        assert!(!d.go(1));
        assert_eq!(d.index(), 4);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut d = Deck::new(5);
        d.go(isize::MAX);
        assert_eq!(d.index(), 4);
        d.go(isize::MIN);
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn select_jumps_in_one_step() {
        let mut d = Deck::new(5);
        d.go(1);
        assert!(d.select(4));
        assert_eq!(d.index(), 4);
        assert!(d.select(0));
        assert_eq!(d.index(), 0);
        assert!(!d.select(0));
    }

    #[test]
    fn empty_deck_stays_at_zero() {
        let mut d = Deck::new(0);
        assert!(d.is_empty());
        assert!(!d.go(3));
        assert_eq!(d.index(), 0);
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(len in 1usize..12, deltas in prop::collection::vec(any::<isize>(), 0..64)) {
            let mut d = Deck::new(len);
            for delta in deltas {
                d.go(delta);
                prop_assert!(d.index() < len);
            }
        }

        #[test]
        fn unit_steps_match_saturating_arithmetic(steps in prop::collection::vec(prop_oneof![Just(-1isize), Just(1isize)], 0..64)) {
            let mut d = Deck::new(5);
            let mut expected: isize = 0;
            for s in steps {
                d.go(s);
                expected = (expected + s).clamp(0, 4);
                prop_assert_eq!(d.index() as isize, expected);
            }
        }
    }
}
