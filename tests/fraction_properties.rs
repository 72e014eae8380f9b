//! Generated checks for the bounded-denominator approximation laws.

use capwire::Fraction;
use proptest::{
    prop_assert,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

// Keeps |num| * max_denom comfortably inside the documented i32
// obligation for every generated (value, bound) pair.
const VALUE_RANGE: std::ops::Range<f64> = -1000.0..1000.0;
const BOUND_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

#[test]
fn denominator_stays_inside_the_bound() {
    let mut runner = deterministic_runner(512);
    runner
        .run(&(VALUE_RANGE, BOUND_RANGE), |(value, max_denom)| {
            let approx = Fraction::approximate(value, max_denom);
            prop_assert!(approx.denom >= 1);
            prop_assert!(approx.denom <= max_denom);
            Ok(())
        })
        .expect("denominators should stay within [1, max_denom]");
}

#[test]
fn widening_the_bound_never_worsens_the_error() {
    let mut runner = deterministic_runner(512);
    // Narrower value range: the widened bound doubles, and the
    // |num| * max_denom obligation has to hold at the widest point.
    runner
        .run(
            &(-100.0_f64..100.0, BOUND_RANGE, 0_u32..=1000),
            |(value, narrow, extra)| {
                let wide = narrow + extra;
                let narrow_err = (Fraction::approximate(value, narrow).value() - value).abs();
                let wide_err = (Fraction::approximate(value, wide).value() - value).abs();
                prop_assert!(
                    wide_err <= narrow_err + 1e-12,
                    "bound {narrow}->{wide} worsened {narrow_err} to {wide_err}"
                );
                Ok(())
            },
        )
        .expect("a wider bound should only sharpen the approximation");
}

#[test]
fn sign_flips_with_the_input() {
    let mut runner = deterministic_runner(256);
    runner
        .run(&(0.001_f64..1000.0, BOUND_RANGE), |(value, max_denom)| {
            let forward = Fraction::approximate(value, max_denom);
            let backward = Fraction::approximate(-value, max_denom);
            prop_assert_eq!(backward.num, -forward.num);
            prop_assert_eq!(backward.denom, forward.denom);
            Ok(())
        })
        .expect("negating the input should only negate the numerator");
}

#[test]
fn zero_is_exactly_zero_over_one() {
    let mut runner = deterministic_runner(64);
    runner
        .run(&BOUND_RANGE, |max_denom| {
            prop_assert_eq!(
                Fraction::approximate(0.0, max_denom),
                Fraction { num: 0, denom: 1 }
            );
            Ok(())
        })
        .expect("zero should approximate to 0/1 under any bound");
}
