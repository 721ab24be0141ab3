//! Primitive sequences with no inner sequence.
//!
//! Each source is a small value type built directly from its parameters.
//! Buffer-backed sources ([`Pointer`], [`Null`]) borrow caller-owned storage;
//! the rest own their whole state and are `Copy` whenever their element is.

mod constant;
mod factorial;
mod generate;
mod null;
mod pointer;
mod power;

use num_traits::One;

use crate::{Error, Take, op::BinaryOp};

pub use constant::Constant;
pub use factorial::Factorial;
pub use generate::{Generate, Geometric, Linear};
pub use null::Null;
pub use pointer::Pointer;
pub use power::Power;

/// Walks `buffer` from its first element with no end check.
///
/// The result always reports a value; bound it with [`take`](crate::take)
/// or use [`array`] instead.
pub fn pointer<T>(buffer: &[T]) -> Pointer<'_, T> {
    Pointer::new(buffer)
}

/// Yields every element of `buffer` in order.
///
/// Equivalent to `take(buffer.len(), pointer(buffer))`.
///
/// # Example
///
/// ```
/// use strand_core::{Sequence, array};
///
/// let mut s = array(&[1, 2, 3]);
/// assert_eq!(s.current(), 1);
/// s.advance();
/// s.advance();
/// assert_eq!(s.current(), 3);
/// s.advance();
/// assert!(!s.has_value());
/// ```
pub fn array<T>(buffer: &[T]) -> Take<Pointer<'_, T>> {
    Take::new(buffer.len(), Pointer::new(buffer))
}

/// Yields the first `n` elements of `buffer`.
///
/// # Errors
///
/// Returns [`Error::BufferTooShort`] if `buffer` holds fewer than `n` elements.
pub fn array_n<T>(n: usize, buffer: &[T]) -> Result<Take<Pointer<'_, T>>, Error> {
    if n > buffer.len() {
        return Err(Error::BufferTooShort {
            requested: n,
            len: buffer.len(),
        });
    }
    Ok(Take::new(n, Pointer::new(buffer)))
}

/// Yields elements of `buffer` up to, not including, the first zero.
pub fn null<T>(buffer: &[T]) -> Null<'_, T> {
    Null::new(buffer)
}

/// Yields `value` forever.
pub fn constant<T>(value: T) -> Constant<T> {
    Constant::new(value)
}

/// Yields `0!, 1!, 2!, ...`.
pub fn factorial<T>() -> Factorial<T>
where
    T: num_traits::Zero + One,
{
    Factorial::new()
}

/// Yields `base^0, base^1, base^2, ...`.
pub fn power<T: One>(base: T) -> Power<T> {
    Power::new(base)
}

/// Yields the orbit `t0, op(t0, dt), op(op(t0, dt), dt), ...`.
///
/// [`Generate::with_op_unit`] builds the same orbit with `dt = 1`.
pub fn generate<T, Op>(t0: T, dt: T, op: Op) -> Generate<T, Op>
where
    Op: BinaryOp<T, T, Output = T>,
{
    Generate::with_op(t0, dt, op)
}

/// Yields `t0, t0 + dt, t0 + 2 dt, ...`.
pub fn linear<T>(t0: T, dt: T) -> Linear<T> {
    Generate::with_step(t0, dt)
}

/// Yields `t0, t0 * ratio, t0 * ratio^2, ...`.
pub fn geometric<T>(t0: T, ratio: T) -> Geometric<T> {
    Generate::with_step(t0, ratio)
}
