use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::{
    Concatenate, Constant, Epsilon, Factorial, Generate, Map, Null, Pointer, Power, Sequence,
    Take,
    op::{BinaryOp, Divides, Minus, Modulus, Plus, Times},
};

/// Two sequences fused elementwise by a binary operator.
///
/// The element at each position is `op(lhs, rhs)` of the operands' elements.
/// A `BinOp` has a value only while both operands do, so operands of
/// different lengths are silently truncated to the shorter one.
///
/// The arithmetic operators `+ - * / %` on any two sequences of this crate
/// build a `BinOp` with the matching operator marker, resolving mixed
/// element types through [`CommonType`](crate::CommonType).
///
/// # Example
///
/// ```
/// use strand_core::{Sequence, array, constant};
///
/// let a = [1_i32, 2, 3];
/// let halves: Vec<f64> = (array(&a) / constant(2.0_f64)).values().collect();
/// assert_eq!(halves, vec![0.5, 1.0, 1.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinOp<Op, S0, S1> {
    op: Op,
    lhs: S0,
    rhs: S1,
}

impl<Op, S0, S1> BinOp<Op, S0, S1> {
    /// Fuses `lhs` and `rhs` with `op`.
    pub const fn new(op: Op, lhs: S0, rhs: S1) -> Self {
        Self { op, lhs, rhs }
    }
}

impl<Op, S0, S1> Sequence for BinOp<Op, S0, S1>
where
    S0: Sequence,
    S1: Sequence,
    Op: BinaryOp<S0::Item, S1::Item>,
{
    type Item = Op::Output;

    fn has_value(&self) -> bool {
        self.lhs.has_value() && self.rhs.has_value()
    }

    fn current(&self) -> Self::Item {
        self.op.apply(self.lhs.current(), self.rhs.current())
    }

    fn advance(&mut self) {
        if !self.has_value() {
            return;
        }

        // An operand known to be on its last element ends the pair, and the
        // other operand stays where it is.
        match (self.lhs.bound(), self.rhs.bound()) {
            (Some(1), _) => self.lhs.advance(),
            (_, Some(1)) => self.rhs.advance(),
            _ => {
                self.lhs.advance();
                self.rhs.advance();
            }
        }
    }

    fn bound(&self) -> Option<usize> {
        match (self.lhs.bound(), self.rhs.bound()) {
            (Some(lhs), Some(rhs)) => Some(lhs.min(rhs)),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        }
    }
}

macro_rules! arithmetic {
    ($([$($params:tt)*] $ty:ty;)+) => {
        $(
            arithmetic!(@op [$($params)*] $ty, Add, add, Plus);
            arithmetic!(@op [$($params)*] $ty, Sub, sub, Minus);
            arithmetic!(@op [$($params)*] $ty, Mul, mul, Times);
            arithmetic!(@op [$($params)*] $ty, Div, div, Divides);
            arithmetic!(@op [$($params)*] $ty, Rem, rem, Modulus);
        )+
    };
    (@op [$($params:tt)*] $ty:ty, $trait:ident, $method:ident, $marker:ident) => {
        impl<$($params)* Rhs> $trait<Rhs> for $ty
        where
            Self: Sequence,
            Rhs: Sequence,
            $marker: BinaryOp<<Self as Sequence>::Item, Rhs::Item>,
        {
            type Output = BinOp<$marker, Self, Rhs>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                BinOp::new($marker, self, rhs)
            }
        }
    };
}

arithmetic! {
    ['a, T,] Pointer<'a, T>;
    ['a, T,] Null<'a, T>;
    [T,] Constant<T>;
    [T,] Factorial<T>;
    [T,] Power<T>;
    [T, Op,] Generate<T, Op>;
    [S,] Take<S>;
    [S,] Epsilon<S>;
    [Op, S0, S1,] BinOp<Op, S0, S1>;
    [P,] Concatenate<P>;
    [S, F,] Map<S, F>;
}
