//! Sequences built by wrapping other sequences.
//!
//! Every adaptor owns its inner sequences by value, so composing never
//! aliases: the inputs are moved (or copied) in and advance independently of
//! any originals the caller kept.

mod binop;
mod concatenate;
mod epsilon;
mod map;
mod take;

pub use binop::BinOp;
pub use concatenate::{Concatenate, Parts};
pub use epsilon::Epsilon;
pub use map::Map;
pub use take::Take;

use crate::Sequence;

/// Limits `s` to at most `n` elements.
pub fn take<S: Sequence>(n: usize, s: S) -> Take<S> {
    Take::new(n, s)
}

/// Ends `s` once `1 + current == 1` in its element type.
pub fn epsilon<S: Sequence>(s: S) -> Epsilon<S> {
    Epsilon::new(s)
}

/// Applies `op` elementwise to `s0` and `s1`, ending with the shorter one.
pub fn binop<Op, S0, S1>(op: Op, s0: S0, s1: S1) -> BinOp<Op, S0, S1>
where
    S0: Sequence,
    S1: Sequence,
{
    BinOp::new(op, s0, s1)
}

/// Yields all of each part in turn.
///
/// `parts` is a tuple of up to eight sequences or an array of sequences.
///
/// # Example
///
/// ```
/// use strand_core::{Sequence, array, concatenate};
///
/// let a = [1, 2];
/// let b = [3, 4, 5];
///
/// let all: Vec<i32> = concatenate((array(&a), array(&b))).values().collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concatenate<P: Parts>(parts: P) -> Concatenate<P> {
    Concatenate::new(parts)
}
