//! Observed accumulation of series terms.
//!
//! [`accumulate`] adds the terms of a sequence the way [`sum`](crate::sum)
//! does, but lets an [`Observer`] watch each partial sum and stop the fold,
//! and caps the number of terms with a [`Config`]. This makes it safe to
//! apply to sequences that might not end, such as a series whose terms never
//! fall below machine precision.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per term, after the term is added. Returning
//! [`Action::StopEarly`] ends the fold with that term included.

mod accumulation;
mod config;
mod event;

pub use accumulation::{Accumulation, Status};
pub use config::{Config, ConfigError};
pub use event::{Action, Event};

use std::ops::Add;

use num_traits::Zero;
use strand_core::{Observer, Sequence};
use tracing::debug;

/// Adds the terms of `s`, reporting each partial sum to `observer`.
///
/// Stops when `s` is exhausted, when `config.max_terms()` terms have been
/// added and more remain, or when the observer returns
/// [`Action::StopEarly`]. The returned value always equals [`sum`](crate::sum)
/// of the terms that were consumed.
pub fn accumulate<S, Obs>(mut s: S, config: &Config, mut observer: Obs) -> Accumulation<S::Item>
where
    S: Sequence,
    S::Item: Zero + Add<Output = S::Item> + Clone,
    Obs: for<'a> Observer<Event<'a, S::Item>, Action>,
{
    let mut value = S::Item::zero();
    let mut terms = 0;

    while s.has_value() {
        if terms == config.max_terms() {
            return finish(Status::MaxTerms, value, terms);
        }

        let term = s.current();
        value = if terms == 0 {
            term.clone()
        } else {
            value + term.clone()
        };

        let event = Event {
            index: terms,
            term: &term,
            partial: &value,
        };
        terms += 1;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver, value, terms);
        }

        s.advance();
    }

    finish(Status::Exhausted, value, terms)
}

/// Adds the terms of `s` without observer support.
///
/// This is a convenience wrapper around [`accumulate`] that uses a no-op
/// observer.
pub fn accumulate_unobserved<S>(s: S, config: &Config) -> Accumulation<S::Item>
where
    S: Sequence,
    S::Item: Zero + Add<Output = S::Item> + Clone,
{
    accumulate(s, config, ())
}

fn finish<T>(status: Status, value: T, terms: usize) -> Accumulation<T> {
    debug!(?status, terms, "accumulation finished");
    Accumulation {
        status,
        value,
        terms,
    }
}
