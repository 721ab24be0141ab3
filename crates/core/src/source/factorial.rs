use std::ops::{AddAssign, MulAssign};

use num_traits::{One, Zero};

use crate::Sequence;

/// The factorials `0!, 1!, 2!, ...`.
///
/// Each step multiplies the running value by the next index, so the sequence
/// never ends. Integer element types overflow quickly; `f64` reaches
/// infinity after `170!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factorial<T> {
    value: T,
    index: T,
}

impl<T: Zero + One> Factorial<T> {
    /// Creates the sequence positioned at `0! = 1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: T::one(),
            index: T::zero(),
        }
    }
}

impl<T: Zero + One> Default for Factorial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for Factorial<T>
where
    T: Copy + One + AddAssign + MulAssign,
{
    type Item = T;

    fn has_value(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.value
    }

    fn advance(&mut self) {
        self.index += T::one();
        self.value *= self.index;
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn first_factorials() {
        let mut s = Factorial::<i32>::new();
        for expected in [1, 1, 2, 6, 24, 120] {
            assert!(s.has_value());
            assert_eq!(s.current(), expected);
            s.advance();
        }
    }

    #[test]
    fn equality_tracks_the_index() {
        let zero = Factorial::<f64>::new();
        let mut one = zero;
        one.advance();

        assert_eq!(zero.current(), one.current(), "0! == 1!");
        assert_ne!(zero, one, "but the cursors differ");
        assert_eq!(zero, Factorial::default());
    }
}
