use std::ops::MulAssign;

use num_traits::One;

use crate::Sequence;

/// The powers `base^0, base^1, base^2, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power<T> {
    base: T,
    value: T,
}

impl<T: One> Power<T> {
    /// Creates the sequence positioned at `base^0 = 1`.
    pub fn new(base: T) -> Self {
        Self {
            base,
            value: T::one(),
        }
    }
}

impl<T> Sequence for Power<T>
where
    T: Copy + MulAssign,
{
    type Item = T;

    fn has_value(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.value
    }

    fn advance(&mut self) {
        self.value *= self.base;
    }
}
