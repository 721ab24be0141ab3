#![allow(clippy::float_cmp)]

use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};
use strand_algorithms::{
    horner, length, product, sum,
    series::{Action, Config, Event, Status, accumulate, accumulate_unobserved},
};
use strand_core::{Sequence, constant, epsilon, factorial, geometric, power};

#[test]
fn exp_series_terms_to_machine_precision() {
    let terms = epsilon(power(1.0_f64) / factorial::<f64>());

    assert_eq!(length(terms), 19);
    assert_abs_diff_eq!(
        1.0_f64.exp() - sum(terms),
        -2.0 * f64::EPSILON,
        epsilon = 0.0
    );
}

#[test]
fn exp_series_at_other_points() {
    for x in [0.1_f64, 0.5, -1.0, 2.0] {
        let terms = epsilon(power(x) / factorial::<f64>());
        assert_ulps_eq!(sum(terms), x.exp(), max_ulps = 2);
    }
}

#[test]
fn horner_of_reciprocal_factorials_is_exp() {
    // Integer numerators promote to f64.
    let coefficients = epsilon(constant(1_i32) / factorial::<f64>());
    assert_eq!(length(coefficients), 19);
    assert_eq!(horner(coefficients, 1.0), 1.0_f64.exp());

    for x in [0.1_f64, 0.5, -1.0] {
        assert_ulps_eq!(horner(coefficients, x), x.exp(), max_ulps = 1);
    }
}

#[test]
fn geometric_series_sums_to_two() {
    let terms = epsilon(geometric(1.0_f64, 0.5));
    assert_eq!(length(terms), 53);
    assert_relative_eq!(sum(terms), 2.0, max_relative = f64::EPSILON);
}

#[test]
fn superfactorial_of_four() {
    // 1! * 2! * 3! * 4! = 288, skipping 0!.
    let mut s = factorial::<u64>().take(5);
    s.advance();
    assert_eq!(product(s), 288);
}

#[test]
fn accumulate_agrees_with_sum() {
    let terms = epsilon(power(0.5_f64) / factorial::<f64>());
    let result = accumulate_unobserved(terms, &Config::default());

    assert_eq!(result.status, Status::Exhausted);
    assert_eq!(result.terms, length(terms));
    assert_eq!(result.value, sum(terms));
}

#[test]
fn accumulate_stops_a_slowly_converging_series() {
    // Harmonic terms 1/n never fall below machine precision in practice.
    let harmonic = constant(1.0_f64) / strand_core::linear(1.0_f64, 1.0);
    let config = Config::new(1000).unwrap();

    let result = accumulate_unobserved(harmonic, &config);
    assert_eq!(result.status, Status::MaxTerms);
    assert_eq!(result.terms, 1000);
    assert_relative_eq!(result.value, 7.485_470_860_550_343, max_relative = 1e-12);
}

#[test]
fn observer_stops_once_terms_are_small() {
    let terms = power(1.0_f64) / factorial::<f64>();
    let mut last_term = f64::NAN;

    let result = accumulate(terms, &Config::default(), |event: &Event<'_, f64>| {
        last_term = *event.term;
        (*event.term < 1e-6).then_some(Action::StopEarly)
    });

    // 1/10! is the first term below 1e-6.
    assert_eq!(result.status, Status::StoppedByObserver);
    assert_eq!(result.terms, 11);
    assert_relative_eq!(last_term, 1.0 / 3_628_800.0);
    assert_relative_eq!(result.value, 1.0_f64.exp(), max_relative = 1e-7);
}
