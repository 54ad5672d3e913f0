//! Error types for the combinatorics workspace.
//!
//! Every function in the workspace reports failure through the single
//! `thiserror`-derived [`Error`] enum below. Argument checks go through the
//! `require!` and `fail!` macros, which produce [`Error::Domain`]; result
//! checks go through `ensure_finite!`, which produces [`Error::Overflow`].

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter lies outside the mathematically valid domain
    /// (negative `n`, `k > n`, `n < 1` for Lah numbers, ...).
    #[error("domain error: {parameter} {constraint}")]
    Domain {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The violated constraint, including the value received.
        constraint: String,
    },

    /// The result is too large for a finite `f64`.
    #[error("overflow: result of {function} is not finite")]
    Overflow {
        /// Name of the function whose result overflowed.
        function: &'static str,
    },
}

impl Error {
    /// Build a [`Error::Domain`] for `parameter`.
    pub fn domain(parameter: &'static str, constraint: impl Into<String>) -> Self {
        Error::Domain {
            parameter,
            constraint: constraint.into(),
        }
    }

    /// Return `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }

    /// Return `true` for [`Error::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check an argument precondition.
///
/// Returns `Err(Error::Domain { .. })` naming `$param` if `$cond` is false.
///
/// # Example
/// ```
/// use comb_core::{require, errors::Error};
/// fn non_negative(n: i64) -> comb_core::errors::Result<i64> {
///     require!(n >= 0, "n", "must be non-negative, got {n}");
///     Ok(n)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(non_negative(-1).unwrap_err().is_domain());
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $param:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain {
                parameter: $param,
                constraint: format!($($msg)*),
            });
        }
    };
}

/// Check that a computed result is finite.
///
/// Evaluates `$value` once; returns `Err(Error::Overflow { .. })` naming
/// `$function` if it is infinite or NaN, otherwise yields the value.
///
/// # Example
/// ```
/// use comb_core::{ensure_finite, errors::Error};
/// fn square(x: f64) -> comb_core::errors::Result<f64> {
///     let y = ensure_finite!(x * x, "square");
///     Ok(y)
/// }
/// assert_eq!(square(3.0), Ok(9.0));
/// assert!(square(f64::MAX).unwrap_err().is_overflow());
/// ```
#[macro_export]
macro_rules! ensure_finite {
    ($value:expr, $function:expr) => {{
        let value: f64 = $value;
        if !value.is_finite() {
            return Err($crate::errors::Error::Overflow {
                function: $function,
            });
        }
        value
    }};
}

/// Return `Err(Error::Domain { .. })` for `$param` immediately.
///
/// # Example
/// ```
/// use comb_core::{fail, errors::Error};
/// fn always_err() -> comb_core::errors::Result<()> {
///     fail!("k", "is not supported");
/// }
/// assert_eq!(always_err().unwrap_err().to_string(), "domain error: k is not supported");
/// ```
#[macro_export]
macro_rules! fail {
    ($param:expr, $($msg:tt)*) => {
        return Err($crate::errors::Error::Domain {
            parameter: $param,
            constraint: format!($($msg)*),
        })
    };
}
