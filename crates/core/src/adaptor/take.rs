use crate::Sequence;

/// A sequence truncated to at most `n` elements.
///
/// Ends after `n` elements or when the inner sequence ends, whichever comes
/// first. Created by [`take`](crate::take) and [`Sequence::take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Take<S> {
    n: usize,
    inner: S,
}

impl<S> Take<S> {
    /// Wraps `inner`, keeping at most `n` of its elements.
    pub const fn new(n: usize, inner: S) -> Self {
        Self { n, inner }
    }

    /// Returns the remaining count bound.
    ///
    /// This is exact whenever the inner sequence has at least that many
    /// elements left, as it does for [`array`](crate::array).
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn has_value(&self) -> bool {
        self.n != 0 && self.inner.has_value()
    }

    fn current(&self) -> S::Item {
        self.inner.current()
    }

    fn advance(&mut self) {
        if self.has_value() {
            self.n -= 1;
            // The inner sequence never steps past the last kept element.
            if self.n != 0 {
                self.inner.advance();
            }
        }
    }

    fn bound(&self) -> Option<usize> {
        Some(self.inner.bound().map_or(self.n, |bound| bound.min(self.n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{array, constant, factorial, linear, null, power, take};

    #[test]
    fn stops_after_n() {
        let mut s = Take::new(2, constant(9));
        assert_eq!(s.size(), 2);

        assert!(s.has_value());
        s.advance();
        assert!(s.has_value());
        s.advance();
        assert!(!s.has_value());
        assert_eq!(s.size(), 0);

        s.advance();
        assert_eq!(s.size(), 0, "advancing past the end is a no-op");
    }

    #[test]
    fn stops_when_inner_ends_first() {
        let t = [1, 2, 0];
        let s = Take::new(10, null(&t));
        assert_eq!(s.values().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn bound_is_the_tighter_limit() {
        let t = [1, 2, 3];
        assert_eq!(Take::new(2, null(&t)).bound(), Some(2));
        assert_eq!(Take::new(5, null(&t)).bound(), Some(3));
        assert_eq!(Take::new(5, constant(1)).bound(), Some(5));
    }

    #[test]
    fn nested_takes_compose() {
        let t = [1, 2, 3, 4];
        let s = array(&t).take(3).take(5);
        assert_eq!(s.values().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn equality_compares_count_and_inner() {
        let t = [1, 2, 3];
        let mut s = array(&t);
        let copy = s;
        assert_eq!(s, copy);

        s.advance();
        assert_ne!(s, copy);
        assert_eq!(copy.current(), 1, "the copy did not move");
    }

    #[test]
    fn integer_sources_stop_before_overflowing() {
        let powers: Vec<u8> = take(8, power(2_u8)).values().collect();
        assert_eq!(powers, vec![1, 2, 4, 8, 16, 32, 64, 128]);

        // 12! is the largest factorial an i32 holds.
        let factorials = factorial::<i32>().take(13);
        assert_eq!(factorials.values().count(), 13);
        assert_eq!(factorials.values().last(), Some(479_001_600));

        let bytes = take(256, linear(0_u8, 1));
        assert_eq!(bytes.map(u32::from).values().sum::<u32>(), 32_640);
    }

    #[test]
    fn inner_sequence_stays_on_the_last_kept_element() {
        let t = [1, 2, 3];
        let mut s = take(2, crate::pointer(&t));
        s.advance();
        s.advance();
        assert!(!s.has_value());
        assert_eq!(s.size(), 0);
        assert_eq!(s.current(), 2, "the inner cursor did not step past it");
    }
}
