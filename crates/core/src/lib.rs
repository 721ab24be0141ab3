//! Core traits and types for Strand lazy sequences.
//!
//! A sequence is a forward-only, pull-based cursor over a (possibly infinite)
//! stream of values. This crate defines the protocol every sequence satisfies
//! and the building blocks composed on top of it:
//!
//! - [`Sequence`]: `has_value`, `current`, `advance`, plus combinator methods
//! - Sources: [`pointer`], [`array`], [`null`], [`constant`], [`factorial`],
//!   [`power`], [`generate`], [`linear`], [`geometric`]
//! - Adaptors: [`take`], [`epsilon`], [`binop`], [`concatenate`], [`Map`]
//! - [`BinaryOp`] and [`CommonType`]: elementwise operators and the result
//!   type of mixing two element types
//! - [`Observer`]: receives events from long-running consumers and
//!   optionally returns control actions
//!
//! # Example
//!
//! ```
//! use strand_core::{Sequence, array};
//!
//! let a = [1_i32, 2, 3];
//! let b = [3_i32, 4, 5];
//!
//! let sums: Vec<i32> = (array(&a) + array(&b)).values().collect();
//! assert_eq!(sums, vec![4, 6, 8]);
//! ```

mod adaptor;
mod error;
mod iter;
mod observer;
mod op;
mod sequence;
mod source;

pub use adaptor::{
    BinOp, Concatenate, Epsilon, Map, Parts, Take, binop, concatenate, epsilon, take,
};
pub use error::Error;
pub use iter::Values;
pub use observer::Observer;
pub use op::{BinaryOp, CommonTuple, CommonType, Divides, Minus, Modulus, Plus, Times};
pub use sequence::Sequence;
pub use source::{
    Constant, Factorial, Generate, Geometric, Linear, Null, Pointer, Power, array, array_n,
    constant, factorial, generate, geometric, linear, null, pointer, power,
};
