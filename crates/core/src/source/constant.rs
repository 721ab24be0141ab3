use crate::Sequence;

/// A sequence that yields the same value forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a constant sequence of `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Sequence for Constant<T> {
    type Item = T;

    fn has_value(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.value.clone()
    }

    fn advance(&mut self) {}
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn always_yields_its_value() {
        let mut five = Constant::new(5);
        let copy = five;
        assert_eq!(five, copy);

        assert!(five.has_value());
        assert_eq!(five.current(), 5);
        five.advance();
        assert!(five.has_value());
        assert_eq!(five.current(), 5);
        assert_eq!(five, copy, "advancing changes nothing");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Constant::<f64>::default().current(), 0.0);
    }
}
