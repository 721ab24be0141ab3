use crate::{
    adaptor::{BinOp, Concatenate, Epsilon, Map, Parts, Take},
    iter::Values,
};

/// The protocol every Strand sequence satisfies.
///
/// A `Sequence` is a cursor over a stream of values. Consumers repeatedly ask
/// [`has_value()`], read [`current()`], and call [`advance()`]; nothing is ever
/// pushed. Sources generate values on their own, while adaptors wrap one or
/// more inner sequences and transform their values or termination.
///
/// ## Implementing `Sequence`
///
/// Only the three cursor operations are required:
/// - [`has_value()`] must be pure and idempotent.
/// - [`current()`] may assume `has_value()` is true.
/// - [`advance()`] must be a no-op once `has_value()` is false.
///
/// Sequences are value types. Cloning one copies its entire state, and
/// advancing the clone never affects the original. Equality (when provided)
/// is structural: two sequences are equal when their construction parameters
/// and cursor positions coincide, not when their remaining output does.
///
/// ## Composing Sequences
///
/// The provided methods wrap `self` by value in an adaptor:
/// - [`Sequence::take()`] – Stop after at most `n` elements.
/// - [`Sequence::epsilon()`] – Stop once a term no longer changes `1 + term`.
/// - [`Sequence::zip_with()`] – Combine elementwise with another sequence.
/// - [`Sequence::chain()`] – Yield another sequence after this one.
/// - [`Sequence::map()`] – Transform each element.
/// - [`Sequence::values()`] – Consume as a standard [`Iterator`].
///
/// [`has_value()`]: Sequence::has_value
/// [`current()`]: Sequence::current
/// [`advance()`]: Sequence::advance
pub trait Sequence {
    type Item;

    /// Returns `true` if [`current()`](Sequence::current) can be called.
    fn has_value(&self) -> bool;

    /// Returns the value at the cursor.
    ///
    /// # Panics
    ///
    /// Implementations may panic if called while `has_value()` is false.
    fn current(&self) -> Self::Item;

    /// Moves the cursor to the next position.
    fn advance(&mut self);

    /// Returns an upper bound on the number of remaining elements, if known.
    ///
    /// `None` means the bound is unknown or the sequence is unbounded.
    fn bound(&self) -> Option<usize> {
        None
    }

    /// Limits this sequence to at most `n` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use strand_core::{Sequence, constant};
    ///
    /// let fives: Vec<i32> = constant(5).take(3).values().collect();
    /// assert_eq!(fives, vec![5, 5, 5]);
    /// ```
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(n, self)
    }

    /// Stops this sequence once its current term is negligible next to `1`.
    fn epsilon(self) -> Epsilon<Self>
    where
        Self: Sized,
    {
        Epsilon::new(self)
    }

    /// Combines this sequence elementwise with `rhs` using `op`.
    ///
    /// The result ends as soon as either operand ends.
    ///
    /// # Example
    ///
    /// ```
    /// use strand_core::{Sequence, array};
    ///
    /// let a = [1, 2, 3];
    /// let b = [10, 20];
    ///
    /// let pairs: Vec<i32> = array(&a)
    ///     .zip_with(|x: i32, y: i32| x * y, array(&b))
    ///     .values()
    ///     .collect();
    /// assert_eq!(pairs, vec![10, 40]);
    /// ```
    fn zip_with<Op, Rhs>(self, op: Op, rhs: Rhs) -> BinOp<Op, Self, Rhs>
    where
        Self: Sized,
        Rhs: Sequence,
    {
        BinOp::new(op, self, rhs)
    }

    /// Yields every element of this sequence, then every element of `next`.
    fn chain<Next>(self, next: Next) -> Concatenate<(Self, Next)>
    where
        Self: Sized,
        Next: Sequence,
        (Self, Next): Parts,
    {
        Concatenate::new((self, next))
    }

    /// Transforms each element with `f`.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Converts this sequence into a standard [`Iterator`].
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }
}
