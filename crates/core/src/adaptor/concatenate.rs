use tracing::trace;

use crate::{
    Error, Sequence,
    op::{CommonTuple, CommonType},
};

/// A fixed collection of sequences addressed by index.
///
/// Implemented for tuples of one to eight sequences, whose element type is
/// the [`CommonTuple`] of their items, and for arrays `[S; N]`. Every indexed
/// access returns [`Error::IndexOutOfRange`] for an index `>= LEN`.
pub trait Parts {
    type Item;

    /// The number of parts.
    const LEN: usize;

    /// Returns whether part `index` has a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no part `index`.
    fn has_value_at(&self, index: usize) -> Result<bool, Error>;

    /// Returns the current value of part `index`, converted to `Self::Item`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no part `index`.
    fn current_at(&self, index: usize) -> Result<Self::Item, Error>;

    /// Advances part `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no part `index`.
    fn advance_at(&mut self, index: usize) -> Result<(), Error>;
}

fn out_of_range(index: usize, len: usize) -> Error {
    Error::IndexOutOfRange { index, len }
}

macro_rules! tuple_parts {
    ($len:literal => $($name:ident . $idx:tt),+) => {
        tuple_parts!(@impl $len, <($($name::Item,)+) as CommonTuple>::Output; $($name . $idx),+);
    };
    (@impl $len:literal, $common:ty; $($name:ident . $idx:tt),+) => {
        impl<$($name),+> Parts for ($($name,)+)
        where
            $($name: Sequence,)+
            ($($name::Item,)+): CommonTuple,
            $($name::Item: CommonType<$common, Output = $common>,)+
        {
            type Item = $common;

            const LEN: usize = $len;

            fn has_value_at(&self, index: usize) -> Result<bool, Error> {
                match index {
                    $($idx => Ok(self.$idx.has_value()),)+
                    _ => Err(out_of_range(index, $len)),
                }
            }

            fn current_at(&self, index: usize) -> Result<Self::Item, Error> {
                match index {
                    $($idx => Ok(<$name::Item as CommonType<$common>>::lift(
                        self.$idx.current(),
                    )),)+
                    _ => Err(out_of_range(index, $len)),
                }
            }

            fn advance_at(&mut self, index: usize) -> Result<(), Error> {
                match index {
                    $($idx => {
                        self.$idx.advance();
                        Ok(())
                    })+
                    _ => Err(out_of_range(index, $len)),
                }
            }
        }
    };
}

tuple_parts!(1 => A.0);
tuple_parts!(2 => A.0, B.1);
tuple_parts!(3 => A.0, B.1, C.2);
tuple_parts!(4 => A.0, B.1, C.2, D.3);
tuple_parts!(5 => A.0, B.1, C.2, D.3, E.4);
tuple_parts!(6 => A.0, B.1, C.2, D.3, E.4, F.5);
tuple_parts!(7 => A.0, B.1, C.2, D.3, E.4, F.5, G.6);
tuple_parts!(8 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<S: Sequence, const N: usize> Parts for [S; N] {
    type Item = S::Item;

    const LEN: usize = N;

    fn has_value_at(&self, index: usize) -> Result<bool, Error> {
        self.get(index)
            .map(Sequence::has_value)
            .ok_or_else(|| out_of_range(index, N))
    }

    fn current_at(&self, index: usize) -> Result<S::Item, Error> {
        self.get(index)
            .map(Sequence::current)
            .ok_or_else(|| out_of_range(index, N))
    }

    fn advance_at(&mut self, index: usize) -> Result<(), Error> {
        self.get_mut(index)
            .map(Sequence::advance)
            .ok_or_else(|| out_of_range(index, N))
    }
}

/// Sequences chained end to end.
///
/// Yields every element of part 0, then every element of part 1, and so on.
/// The active index always points at a part with a value, or one past the
/// last part once everything is exhausted: construction and every advance
/// skip over parts that are already empty.
///
/// Equality compares the parts and the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concatenate<P> {
    parts: P,
    active: usize,
}

impl<P: Parts> Concatenate<P> {
    /// Chains `parts`, starting at the first non-empty one.
    pub fn new(parts: P) -> Self {
        let mut concatenate = Self { parts, active: 0 };
        concatenate.settle();
        concatenate
    }

    /// Returns the index of the part currently being yielded.
    ///
    /// Equals `P::LEN` once every part is exhausted.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns the current value of the active part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] once every part is exhausted.
    pub fn try_current(&self) -> Result<P::Item, Error> {
        self.parts.current_at(self.active)
    }

    /// Moves the active index past exhausted parts.
    fn settle(&mut self) {
        while let Ok(false) = self.parts.has_value_at(self.active) {
            self.active += 1;
            trace!(active = self.active, parts = P::LEN, "concatenate moved to next part");
        }
    }
}

impl<P: Parts> Sequence for Concatenate<P> {
    type Item = P::Item;

    fn has_value(&self) -> bool {
        matches!(self.parts.has_value_at(self.active), Ok(true))
    }

    /// Returns the current value of the active part.
    ///
    /// # Panics
    ///
    /// Panics if every part is exhausted. Use
    /// [`try_current()`](Concatenate::try_current) to get an error instead.
    fn current(&self) -> P::Item {
        match self.try_current() {
            Ok(value) => value,
            Err(error) => panic!("concatenate has no current value: {error}"),
        }
    }

    fn advance(&mut self) {
        if self.parts.advance_at(self.active).is_ok() {
            self.settle();
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::{Take, array, constant, null};

    #[test]
    fn yields_parts_in_order() {
        let a = [1, 2];
        let b = [3, 4, 5];
        let mut c = Concatenate::new((array(&a), array(&b)));

        for expected in 1..=5 {
            assert!(c.has_value());
            assert_eq!(c.current(), expected);
            c.advance();
        }
        assert!(!c.has_value());
        assert_eq!(c.active(), 2);

        c.advance();
        assert!(!c.has_value(), "advancing past the end is a no-op");
    }

    #[test]
    fn skips_empty_parts_anywhere() {
        let empty: [i32; 0] = [];
        let a = [1];
        let b = [2, 3];

        let c = Concatenate::new((
            array(&empty),
            array(&a),
            array(&empty),
            array(&b),
            array(&empty),
        ));
        assert_eq!(c.active(), 1);
        assert_eq!(c.values().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn all_empty_parts_are_exhausted_at_once() {
        let zero = [0_u8];
        let c = Concatenate::new((null(&zero), null(&zero)));
        assert!(!c.has_value());
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn mixed_items_resolve_to_common_type() {
        let ints = [1_i32, 2];
        let bytes = [3_u8];
        let floats = [4.5_f64];

        let c = Concatenate::new((array(&ints), array(&bytes), array(&floats)));
        assert_eq!(c.values().collect::<Vec<f64>>(), vec![1.0, 2.0, 3.0, 4.5]);
    }

    #[test]
    fn lossy_mixes_resolve_to_common_type() {
        let big = [1_i64 << 53, 3];
        let halves = [0.5_f64];
        let c = Concatenate::new((array(&big), array(&halves)));
        assert_eq!(
            c.values().collect::<Vec<f64>>(),
            vec![9_007_199_254_740_992.0, 3.0, 0.5]
        );
    }

    #[test]
    fn arrays_of_sequences() {
        let a = [1, 2];
        let b = [3];
        let parts: [Take<_>; 3] = [array(&a), array(&b), array(&a)];

        let c = Concatenate::new(parts);
        assert_eq!(c.values().collect::<Vec<_>>(), vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn infinite_part_is_never_left() {
        let a = [1];
        let c = Concatenate::new((array(&a), constant(7_i32), array(&a)));
        let first: Vec<i32> = c.take(4).values().collect();
        assert_eq!(first, vec![1, 7, 7, 7]);
    }

    #[test]
    fn invalid_indices_are_reported() {
        let a = [1];
        let mut parts = (array(&a), array(&a));

        assert_eq!(
            parts.current_at(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            parts.advance_at(5),
            Err(Error::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!([constant(1.0); 2].has_value_at(2).ok(), None);

        let mut c = Concatenate::new(parts);
        c.advance();
        c.advance();
        assert_eq!(
            c.try_current(),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "concatenate has no current value")]
    fn reading_past_the_end_panics() {
        let a = [1];
        let mut c = Concatenate::new((array(&a),));
        c.advance();
        let _ = c.current();
    }

    #[test]
    fn equality_includes_the_active_index() {
        let a = [1];
        let b = [2];
        let c = array(&a).chain(array(&b));
        let mut d = c;

        assert_eq!(c, d);
        d.advance();
        assert_ne!(c, d);
        assert_eq!(c.current(), 1, "the copy did not move");
    }
}
