use std::ops::{Add, Mul};

use num_traits::{One, Zero};
use strand_core::Sequence;
use tracing::trace;

/// Adds the elements of `s` from left to right.
///
/// Returns zero for an empty sequence. Otherwise the fold starts from the
/// first element, so `sum` of a single element is that element exactly.
pub fn sum<S>(s: S) -> S::Item
where
    S: Sequence,
    S::Item: Zero + Add<Output = S::Item>,
{
    reduce(s, S::Item::zero(), |total, value| total + value)
}

/// Multiplies the elements of `s` from left to right.
///
/// Returns one for an empty sequence.
pub fn product<S>(s: S) -> S::Item
where
    S: Sequence,
    S::Item: One + Mul<Output = S::Item>,
{
    reduce(s, S::Item::one(), |total, value| total * value)
}

/// Evaluates the polynomial with coefficients `s` at `x`.
///
/// The first element of `s` is the constant coefficient. Evaluation uses
/// nested multiplication `c0 + x (c1 + x (c2 + ...))`, innermost first, so
/// the coefficients are buffered before folding. Returns zero for an empty
/// sequence.
///
/// # Example
///
/// ```
/// use strand_algorithms::horner;
/// use strand_core::array;
///
/// // 1 + 2x + 3x^2 at x = 2
/// assert_eq!(horner(array(&[1, 2, 3]), 2), 17);
/// ```
pub fn horner<S>(s: S, x: S::Item) -> S::Item
where
    S: Sequence,
    S::Item: Zero + Add<Output = S::Item> + Mul<Output = S::Item> + Copy,
{
    let coefficients: Vec<S::Item> = s.values().collect();
    trace!(degree = coefficients.len().saturating_sub(1), "horner");

    coefficients
        .into_iter()
        .rev()
        .fold(S::Item::zero(), |acc, c| c + x * acc)
}

fn reduce<S, F>(mut s: S, empty: S::Item, f: F) -> S::Item
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    if !s.has_value() {
        return empty;
    }

    let mut total = s.current();
    s.advance();
    while s.has_value() {
        total = f(total, s.current());
        s.advance();
    }
    total
}
