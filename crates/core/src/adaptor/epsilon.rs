use std::ops::Add;

use num_traits::One;

use crate::Sequence;

/// A numeric sequence that ends once its terms stop mattering.
///
/// `Epsilon` reports a value while `1 + current != 1` in the element type,
/// the classic machine-epsilon test. It bounds sequences whose terms shrink
/// toward zero, such as the terms of a convergent series.
///
/// # Example
///
/// ```
/// use strand_core::{Geometric, Sequence};
///
/// // 1, 1/2, 1/4, ... down to 2^-52: one term per bit of `f64` precision.
/// let halves = Geometric::with_step(1.0_f64, 0.5).epsilon();
/// assert_eq!(halves.values().count(), 53);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epsilon<S> {
    inner: S,
}

impl<S> Epsilon<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Sequence for Epsilon<S>
where
    S: Sequence,
    S::Item: One + Add<Output = S::Item> + PartialEq,
{
    type Item = S::Item;

    fn has_value(&self) -> bool {
        self.inner.has_value() && self.inner.current() + S::Item::one() != S::Item::one()
    }

    fn current(&self) -> S::Item {
        self.inner.current()
    }

    fn advance(&mut self) {
        if self.has_value() {
            self.inner.advance();
        }
    }

    fn bound(&self) -> Option<usize> {
        self.inner.bound()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::{Geometric, array, geometric};

    #[test]
    fn halving_double_lasts_one_term_per_bit() {
        assert_eq!(Epsilon::new(geometric(1.0_f64, 0.5)).values().count(), 53);
    }

    #[test]
    fn halving_single_lasts_one_term_per_bit() {
        assert_eq!(Epsilon::new(geometric(1.0_f32, 0.5)).values().count(), 24);
    }

    #[test]
    fn last_term_is_the_unit_roundoff_of_one() {
        let last = Epsilon::new(Geometric::with_step(1.0_f64, 0.5))
            .values()
            .last()
            .expect("not empty");
        assert_eq!(last, f64::EPSILON);
    }

    #[test]
    fn bounded_terms_sum_to_the_series_limit() {
        let total: f64 = Epsilon::new(geometric(1.0_f64, 0.5)).values().sum();
        approx::assert_relative_eq!(total, 2.0, max_relative = f64::EPSILON);

        let total: f64 = Epsilon::new(geometric(1.0_f64, 0.1)).values().sum();
        approx::assert_relative_eq!(total, 10.0 / 9.0, max_relative = 4.0 * f64::EPSILON);
    }

    #[test]
    fn negative_terms_also_converge() {
        // Doubles just below one are twice as dense, so one more term survives.
        let s = Epsilon::new(geometric(-1.0_f64, 0.5));
        assert_eq!(s.values().count(), 54);
    }

    #[test]
    fn respects_inner_end() {
        let t = [1.0, 0.5];
        let s = Epsilon::new(array(&t));
        assert_eq!(s.values().collect::<Vec<_>>(), vec![1.0, 0.5]);
    }

    #[test]
    fn stays_exhausted() {
        let mut s = Epsilon::new(geometric(1e-20_f64, 0.5));
        assert!(!s.has_value());
        s.advance();
        assert!(!s.has_value());
        assert_eq!(s.current(), 1e-20, "the inner cursor did not move");
    }
}
