use std::{fmt, ptr};

use num_traits::Zero;

use crate::Sequence;

/// A zero-terminated view of a borrowed buffer.
///
/// Yields elements up to, not including, the first zero. A buffer without a
/// zero ends at its last element.
#[derive(Clone, Copy)]
pub struct Null<'a, T> {
    buffer: &'a [T],
    offset: usize,
}

impl<'a, T> Null<'a, T> {
    /// Creates a view starting at the first element of `buffer`.
    pub const fn new(buffer: &'a [T]) -> Self {
        Self { buffer, offset: 0 }
    }

    fn address(&self) -> *const T {
        self.buffer.as_ptr().wrapping_add(self.offset)
    }
}

impl<T> Sequence for Null<'_, T>
where
    T: Copy + Zero,
{
    type Item = T;

    fn has_value(&self) -> bool {
        self.buffer
            .get(self.offset)
            .is_some_and(|value| !value.is_zero())
    }

    fn current(&self) -> T {
        self.buffer[self.offset]
    }

    fn advance(&mut self) {
        if self.has_value() {
            self.offset += 1;
        }
    }

    fn bound(&self) -> Option<usize> {
        Some(self.buffer.len().saturating_sub(self.offset))
    }
}

impl<T> PartialEq for Null<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.address(), other.address())
    }
}

impl<T> Eq for Null<'_, T> {}

impl<T> fmt::Debug for Null<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Null")
            .field("address", &self.address())
            .field("offset", &self.offset)
            .finish()
    }
}
