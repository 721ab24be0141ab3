use std::fmt;

use crate::Sequence;

/// A sequence whose elements are transformed by a function.
///
/// Created by [`Sequence::map`]. Useful for converting element types some
/// other way than their [`CommonType`](crate::CommonType) would, such as
/// rounding `f64` values to `i64`, before combining sequences.
#[derive(Clone, Copy)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    /// Wraps `inner`, applying `f` to each element.
    pub const fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;

    fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    fn current(&self) -> B {
        (self.f)(self.inner.current())
    }

    fn advance(&mut self) {
        self.inner.advance();
    }

    fn bound(&self) -> Option<usize> {
        self.inner.bound()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
