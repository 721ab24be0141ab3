//! Generic algorithms over Strand sequences.
//!
//! Every function here accepts any [`Sequence`] by value, so the caller's
//! sequence is never disturbed: pass a copy to keep the original.
//!
//! - Traversal: [`length`], [`drop`], [`last`], [`back`], [`same`]
//! - Folds: [`sum`], [`product`], [`horner`]
//! - [`series`]: observed accumulation with a term limit and early stopping
//!
//! Folds loop until the sequence ends. Bound unbounded sources with
//! [`take`](strand_core::take) or [`epsilon`](strand_core::epsilon) first.
//!
//! # Example
//!
//! ```
//! use strand_algorithms::{horner, sum};
//! use strand_core::{Sequence, constant, factorial, power};
//!
//! let x = 1.0_f64;
//!
//! // exp(x) from its Taylor terms x^n / n!
//! let terms = (power(x) / factorial::<f64>()).epsilon();
//! assert!((sum(terms) - x.exp()).abs() < 4.0 * f64::EPSILON);
//!
//! // ... or from the coefficients 1 / n! by nested multiplication.
//! let coefficients = (constant(1.0_f64) / factorial::<f64>()).epsilon();
//! assert!((horner(coefficients, x) - x.exp()).abs() < 4.0 * f64::EPSILON);
//! ```
//!
//! [`Sequence`]: strand_core::Sequence

mod fold;
mod traverse;

pub mod series;

pub use fold::{horner, product, sum};
pub use traverse::{back, drop, last, length, same};
