//! # comb-math
//!
//! Closed-form combinatorial functions over `f64`: the factorial family,
//! permutations and combinations, Catalan, Lah and multinomial numbers,
//! and log-space variants for magnitudes past the `f64` range.
//!
//! Every function is pure and validates its arguments before doing any
//! arithmetic. Invalid arguments yield
//! [`Error::Domain`](comb_core::Error::Domain); results too large for a
//! finite `f64` yield [`Error::Overflow`](comb_core::Error::Overflow).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Permutations, combinations and the central binomial coefficient.
pub mod counting;

/// Factorial, double, rising and falling factorials, and subfactorial.
pub mod factorials;

/// Natural-log variants of the factorial-based counts.
pub mod log_space;

/// Catalan, Lah and multinomial numbers.
pub mod numbers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use counting::{central_binomial_coefficient, combinations, permutations, Repetition};
pub use factorials::{
    double_factorial, factorial, falling_factorial, rising_factorial, subfactorial,
};
pub use log_space::{ln_combinations, ln_factorial, ln_multinomial, ln_permutations};
pub use numbers::{catalan_number, lah_number, multinomial};
