use std::{fmt, ptr};

use crate::Sequence;

/// An unbounded cursor over a borrowed buffer.
///
/// `Pointer` never reports exhaustion: [`has_value()`](Sequence::has_value)
/// is always `true`, and keeping reads inside the buffer is the caller's job.
/// Use it behind [`Take`](crate::Take), as [`array`](crate::array) does.
///
/// Two pointers are equal when they address the same element of the same
/// buffer.
#[derive(Clone, Copy)]
pub struct Pointer<'a, T> {
    buffer: &'a [T],
    offset: usize,
}

impl<'a, T> Pointer<'a, T> {
    /// Creates a pointer at the first element of `buffer`.
    pub const fn new(buffer: &'a [T]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Returns the address of the element under the cursor.
    #[must_use]
    pub fn address(&self) -> *const T {
        self.buffer.as_ptr().wrapping_add(self.offset)
    }
}

impl<T: Copy> Sequence for Pointer<'_, T> {
    type Item = T;

    fn has_value(&self) -> bool {
        true
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor has walked past the end of the buffer.
    fn current(&self) -> T {
        self.buffer[self.offset]
    }

    fn advance(&mut self) {
        self.offset += 1;
    }
}

impl<T> PartialEq for Pointer<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.address(), other.address())
    }
}

impl<T> Eq for Pointer<'_, T> {}

impl<T> fmt::Debug for Pointer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pointer")
            .field("address", &self.address())
            .field("offset", &self.offset)
            .finish()
    }
}
