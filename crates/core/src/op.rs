//! Binary operators applied elementwise by [`BinOp`](crate::BinOp) and
//! iteratively by [`Generate`](crate::Generate).
//!
//! The zero-sized markers [`Plus`], [`Minus`], [`Times`], [`Divides`], and
//! [`Modulus`] resolve mixed operand types through [`CommonType`] before
//! applying the matching `std::ops` operator. Two operators are "the same
//! operator" exactly when they have the same type, so markers derive
//! `PartialEq` and compare equal to themselves. Closures implement
//! [`BinaryOp`] too, but carry no equality.

mod common;

use std::ops::{Add, Div, Mul, Rem, Sub};

pub use common::{CommonTuple, CommonType};

/// A binary operation from `L` and `R` to `Self::Output`.
pub trait BinaryOp<L, R = L> {
    type Output;

    /// Applies the operation.
    fn apply(&self, lhs: L, rhs: R) -> Self::Output;
}

impl<F, L, R, O> BinaryOp<L, R> for F
where
    F: Fn(L, R) -> O,
{
    type Output = O;

    fn apply(&self, lhs: L, rhs: R) -> O {
        self(lhs, rhs)
    }
}

macro_rules! marker_op {
    ($(#[$doc:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name;

        impl<L, R> BinaryOp<L, R> for $name
        where
            L: CommonType<R>,
            L::Output: $bound<Output = L::Output>,
        {
            type Output = L::Output;

            #[inline]
            fn apply(&self, lhs: L, rhs: R) -> Self::Output {
                <L as CommonType<R>>::lift(lhs).$method(<L as CommonType<R>>::lift_rhs(rhs))
            }
        }
    };
}

marker_op!(
    /// Addition in the common type of both operands.
    Plus, Add, add
);
marker_op!(
    /// Subtraction in the common type of both operands.
    Minus, Sub, sub
);
marker_op!(
    /// Multiplication in the common type of both operands.
    Times, Mul, mul
);
marker_op!(
    /// Division in the common type of both operands.
    Divides, Div, div
);
marker_op!(
    /// Remainder in the common type of both operands.
    Modulus, Rem, rem
);
