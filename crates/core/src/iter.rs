use std::iter::FusedIterator;

use crate::Sequence;

/// An [`Iterator`] over the remaining values of a sequence.
///
/// Created by [`Sequence::values`]. Each call to `next` reads the current
/// value and advances, so the standard iterator toolkit (`collect`, `zip`,
/// `sum`, ...) works on any sequence.
#[derive(Debug, Clone)]
pub struct Values<S> {
    inner: S,
}

impl<S> Values<S> {
    pub(crate) const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the sequence positioned at the next unread value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Iterator for Values<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.has_value() {
            return None;
        }
        let value = self.inner.current();
        self.inner.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.inner.has_value() {
            (1, self.inner.bound())
        } else {
            (0, Some(0))
        }
    }
}

impl<S: Sequence> FusedIterator for Values<S> {}
