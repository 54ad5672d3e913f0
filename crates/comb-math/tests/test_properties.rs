//! Behavioural checks across the whole function set.
//!
//! Reference values, boundary behaviour at `n = -1` / `n = 0`, the
//! `P(n, n) = n!` identity, and monotonicity in `n` (via proptest).

use comb_core::{Error, Integer, Real, Result};
use comb_math::{
    catalan_number, central_binomial_coefficient, combinations, double_factorial, factorial,
    falling_factorial, lah_number, multinomial, permutations, rising_factorial, subfactorial,
    Repetition,
};
use proptest::prelude::*;

// ───────────────────────── reference values ─────────────────────────

#[test]
fn test_factorial_family_reference_values() {
    assert_eq!(factorial(0), Ok(1.0));
    assert_eq!(factorial(5), Ok(120.0));

    assert_eq!(double_factorial(0), Ok(1.0));
    assert_eq!(double_factorial(5), Ok(15.0));
    assert_eq!(double_factorial(6), Ok(48.0));

    assert_eq!(rising_factorial(2.0, 3), Ok(24.0));
    assert_eq!(rising_factorial(-11.5, 0), Ok(1.0));

    assert_eq!(falling_factorial(5.0, 2), Ok(20.0));
    assert_eq!(falling_factorial(2.0, 5), Ok(0.0));

    assert_eq!(subfactorial(0), Ok(1.0));
    assert_eq!(subfactorial(1), Ok(0.0));
    assert_eq!(subfactorial(4), Ok(9.0));
}

#[test]
fn test_counting_reference_values() {
    assert_eq!(permutations(5, None), Ok(120.0));
    assert_eq!(permutations(5, Some(2)), Ok(20.0));
    assert!(permutations(3, Some(5)).unwrap_err().is_domain());

    assert_eq!(combinations(5, 2, Repetition::Without), Ok(10.0));
    assert_eq!(combinations(5, 2, Repetition::With), Ok(15.0));

    assert_eq!(central_binomial_coefficient(3), Ok(20.0));
}

#[test]
fn test_derived_numbers_reference_values() {
    assert_eq!(catalan_number(0), Ok(1.0));
    assert_eq!(catalan_number(3), Ok(5.0));
    assert_eq!(catalan_number(4), Ok(14.0));

    assert_eq!(lah_number(3, 1), Ok(6.0));
    assert_eq!(lah_number(2, 1), Ok(2.0));
    assert!(lah_number(1, 2).unwrap_err().is_domain());

    assert_eq!(multinomial(&[2, 3]), Ok(10.0));
    assert_eq!(multinomial(&[]), Ok(1.0));
}

// ───────────────────────── boundaries ─────────────────────────

type Unary = fn(Integer) -> Result<Real>;

fn unary_functions() -> [(&'static str, Unary); 11] {
    [
        ("factorial", factorial as Unary),
        ("double_factorial", double_factorial as Unary),
        ("rising_factorial", (|n: Integer| rising_factorial(3.5, n)) as Unary),
        ("falling_factorial", (|n: Integer| falling_factorial(3.5, n)) as Unary),
        ("subfactorial", subfactorial as Unary),
        ("permutations", (|n: Integer| permutations(n, None)) as Unary),
        ("permutations_k", (|n: Integer| permutations(n, Some(0))) as Unary),
        ("combinations", (|n: Integer| combinations(n, 0, Repetition::Without)) as Unary),
        ("combinations_rep", (|n: Integer| combinations(n, 0, Repetition::With)) as Unary),
        ("central_binomial_coefficient", central_binomial_coefficient as Unary),
        ("catalan_number", catalan_number as Unary),
    ]
}

#[test]
fn test_negative_n_is_a_domain_error() {
    for (name, f) in unary_functions() {
        match f(-1) {
            Err(Error::Domain { parameter, .. }) => assert_eq!(parameter, "n", "{name}"),
            other => panic!("{name}(-1) returned {other:?}"),
        }
    }
    assert!(multinomial(&[-1]).unwrap_err().is_domain());
}

#[test]
fn test_zero_n_hits_the_base_case() {
    for (name, f) in unary_functions() {
        assert_eq!(f(0), Ok(1.0), "{name}(0)");
    }
}

#[test]
fn test_lah_boundaries() {
    assert_eq!(lah_number(1, 1), Ok(1.0));
    match lah_number(0, 1) {
        Err(Error::Domain { parameter, .. }) => assert_eq!(parameter, "n"),
        other => panic!("unexpected {other:?}"),
    }
    match lah_number(1, 0) {
        Err(Error::Domain { parameter, .. }) => assert_eq!(parameter, "k"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_overflow_is_never_a_finite_value() {
    assert!(factorial(171).unwrap_err().is_overflow());
    assert!(double_factorial(400).unwrap_err().is_overflow());
    assert!(subfactorial(200).unwrap_err().is_overflow());
    assert!(permutations(171, None).unwrap_err().is_overflow());
    assert!(catalan_number(600).unwrap_err().is_overflow());
    assert_eq!(
        catalan_number(520).unwrap_err(),
        Error::Overflow { function: "catalan_number" }
    );
    assert!(lah_number(200, 1).unwrap_err().is_overflow());
    assert!(multinomial(&[600, 600]).unwrap_err().is_overflow());
    assert_eq!(
        factorial(171).unwrap_err().to_string(),
        "overflow: result of factorial is not finite"
    );
}

// ───────────────────────── identities ─────────────────────────

#[test]
fn test_full_permutation_is_factorial() {
    for n in 0..=170 {
        let p = permutations(n, Some(n)).unwrap();
        let f = factorial(n).unwrap();
        approx::assert_relative_eq!(p, f, max_relative = 1e-12);
    }
}

#[test]
fn test_full_permutation_is_factorial_exactly_in_mantissa_range() {
    for n in 0..=22 {
        assert_eq!(permutations(n, Some(n)), factorial(n), "n = {n}");
    }
}

// ───────────────────────── monotonicity ─────────────────────────

proptest! {
    #[test]
    fn prop_factorial_non_decreasing(n in 0i64..170) {
        prop_assert!(factorial(n + 1).unwrap() >= factorial(n).unwrap());
    }

    #[test]
    fn prop_permutations_non_decreasing_in_n(k in 0i64..20, extra in 0i64..200) {
        let n = k + extra;
        prop_assert!(permutations(n + 1, Some(k)).unwrap() >= permutations(n, Some(k)).unwrap());
    }

    #[test]
    fn prop_combinations_non_decreasing_in_n(k in 0i64..20, extra in 0i64..200) {
        let n = k + extra;
        for repetition in [Repetition::Without, Repetition::With] {
            let next = combinations(n + 1, k, repetition).unwrap();
            prop_assert!(next >= combinations(n, k, repetition).unwrap());
        }
    }

    #[test]
    fn prop_results_are_non_negative(n in 0i64..60, k in 0i64..60) {
        prop_assume!(k <= n);
        prop_assert!(permutations(n, Some(k)).unwrap() >= 0.0);
        prop_assert!(combinations(n, k, Repetition::Without).unwrap() >= 0.0);
        prop_assert!(subfactorial(n).unwrap() >= 0.0);
        prop_assert!(catalan_number(n).unwrap() >= 0.0);
    }

    #[test]
    fn prop_calls_are_deterministic(n in 0i64..100, k in 0i64..100) {
        prop_assume!(k <= n);
        prop_assert_eq!(
            combinations(n, k, Repetition::Without),
            combinations(n, k, Repetition::Without)
        );
        prop_assert_eq!(multinomial(&[k, n - k]), multinomial(&[k, n - k]));
    }
}
