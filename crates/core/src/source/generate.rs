use num_traits::One;

use crate::{
    Sequence,
    op::{BinaryOp, Plus, Times},
};

/// The orbit `t0, op(t0, dt), op(op(t0, dt), dt), ...` of a binary operator.
///
/// A generator never ends on its own, like [`Constant`](crate::Constant) or
/// [`Factorial`](crate::Factorial): [`has_value()`](Sequence::has_value) is
/// always `true`. Bound it with [`take`](crate::take) or
/// [`epsilon`](crate::epsilon) before folding it.
///
/// Two generators are equal when their current value, step, and operator
/// all match; operators of different types never compare.
///
/// # Example
///
/// ```
/// use strand_core::{Geometric, Sequence};
///
/// let s = Geometric::with_step(1.0_f64, 2.0);
/// let values: Vec<f64> = s.take(4).values().collect();
/// assert_eq!(values, vec![1.0, 2.0, 4.0, 8.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generate<T, Op = Plus> {
    value: T,
    step: T,
    op: Op,
}

/// An arithmetic progression: `t0, t0 + dt, t0 + 2 dt, ...`.
pub type Linear<T> = Generate<T, Plus>;

/// A geometric progression: `t0, t0 * r, t0 * r^2, ...`.
pub type Geometric<T> = Generate<T, Times>;

impl<T, Op> Generate<T, Op> {
    /// Creates a generator with an explicit operator.
    pub const fn with_op(t0: T, dt: T, op: Op) -> Self {
        Self {
            value: t0,
            step: dt,
            op,
        }
    }

    /// Creates a generator with an explicit operator and the unit step `dt = 1`.
    pub fn with_op_unit(t0: T, op: Op) -> Self
    where
        T: One,
    {
        Self::with_op(t0, T::one(), op)
    }

    /// Creates a generator whose operator is the default value of `Op`.
    pub fn with_step(t0: T, dt: T) -> Self
    where
        Op: Default,
    {
        Self::with_op(t0, dt, Op::default())
    }

    /// Creates a generator with the unit step `dt = 1`.
    pub fn new(t0: T) -> Self
    where
        T: One,
        Op: Default,
    {
        Self::with_step(t0, T::one())
    }

    /// Returns the step applied on each advance.
    pub fn step(&self) -> &T {
        &self.step
    }
}

impl<T, Op> Sequence for Generate<T, Op>
where
    T: Clone,
    Op: BinaryOp<T, T, Output = T>,
{
    type Item = T;

    fn has_value(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.value.clone()
    }

    fn advance(&mut self) {
        self.value = self.op.apply(self.value.clone(), self.step.clone());
    }
}
