//! # combinatorics
//!
//! Closed-form combinatorial functions: factorials, permutations,
//! combinations, Catalan, Lah and multinomial numbers.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `comb-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use combinatorics::prelude::*;
//!
//! assert_eq!(factorial(5), Ok(120.0));
//! assert_eq!(combinations(5, 2, Repetition::With), Ok(15.0));
//! assert_eq!(catalan_number(4), Ok(14.0));
//!
//! // Every function validates its arguments first.
//! assert!(permutations(3, Some(5)).unwrap_err().is_domain());
//!
//! // Results past the f64 range are reported, never returned as infinity.
//! assert!(factorial(171).unwrap_err().is_overflow());
//! assert!(ln_factorial(171).unwrap().is_finite());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use comb_core as core;

/// The combinatorial functions.
pub use comb_math as math;

/// Glob-importable set of every function, the error types and the aliases.
pub mod prelude {
    pub use comb_core::{Error, Integer, Real, Result};
    pub use comb_math::{
        catalan_number, central_binomial_coefficient, combinations, double_factorial, factorial,
        falling_factorial, lah_number, ln_combinations, ln_factorial, ln_multinomial,
        ln_permutations, multinomial, permutations, rising_factorial, subfactorial, Repetition,
    };
}
