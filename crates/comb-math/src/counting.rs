//! Permutations, combinations and the central binomial coefficient.
//!
//! Ratios of factorials are never formed directly. Permutations use the
//! falling product `n (n - 1) ··· (n - k + 1)` and combinations use the
//! multiplicative recurrence, so a result is finite whenever the true value
//! is, even when `n!` itself would overflow.

use comb_core::{ensure_finite, require, Integer, Real, Result};

use crate::factorials::factorial;

/// Whether a combination may pick the same item more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repetition {
    /// Each item is picked at most once: `n! / ((n - k)! k!)`.
    #[default]
    Without,
    /// Items may be picked repeatedly: `(n + k - 1)! / ((n - 1)! k!)`.
    With,
}

/// Validate a selection of `k` items out of `n`.
///
/// Shared by the linear- and log-space counting functions.
pub(crate) fn check_selection(n: Integer, k: Integer) -> Result<()> {
    require!(n >= 0, "n", "must be non-negative, got {n}");
    require!(k >= 0, "k", "must be non-negative, got {k}");
    require!(k <= n, "k", "cannot be larger than n ({n}), got {k}");
    Ok(())
}

/// Binomial coefficient `C(m, k)` for `0 <= k <= m`, by the recurrence
///
/// ```text
///            j   m - j + i
/// C(m, j) =  ∏   ---------      j = min(k, m - k)
///           i=1      i
/// ```
///
/// Every partial product is itself a binomial coefficient, so the loop
/// stays exact while the values fit the `f64` mantissa.
pub(crate) fn binomial(m: i128, k: i128, function: &'static str) -> Result<Real> {
    debug_assert!(0 <= k && k <= m);
    let j = k.min(m - k);
    let mut c: Real = 1.0;
    for i in 1..=j {
        let numerator = (m - j + i) as Real;
        let scaled = c * numerator;
        // Divide first only once the exact product no longer fits.
        let next = if scaled.is_finite() {
            scaled / i as Real
        } else {
            c / i as Real * numerator
        };
        c = ensure_finite!(next, function);
    }
    Ok(c.round())
}

/// Number of ordered arrangements.
///
/// * `k = None`: `P(n) = n!`, arrangements of all `n` items.
/// * `k = Some(k)`: `P(n, k) = n! / (n - k)!`, arrangements of `k` items
///   chosen from `n`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`, `k < 0` or
/// `k > n`; [`Error::Overflow`](comb_core::Error::Overflow) if the result
/// is not finite.
pub fn permutations(n: Integer, k: Option<Integer>) -> Result<Real> {
    let Some(k) = k else {
        require!(n >= 0, "n", "must be non-negative, got {n}");
        return factorial(n);
    };
    check_selection(n, k)?;
    let mut product: Real = 1.0;
    for i in 0..k {
        product = ensure_finite!(product * (n - i) as Real, "permutations");
    }
    Ok(product)
}

/// Number of unordered selections of `k` items out of `n`.
///
/// ```text
///  Repetition::Without:  C(n, k)  = n! / ((n - k)! k!)
///  Repetition::With:     C'(n, k) = (n + k - 1)! / ((n - 1)! k!)
/// ```
///
/// `k <= n` is required in both modes. With repetition, `C'(0, 0) = 1`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`, `k < 0` or
/// `k > n`; [`Error::Overflow`](comb_core::Error::Overflow) if the result
/// is not finite.
pub fn combinations(n: Integer, k: Integer, repetition: Repetition) -> Result<Real> {
    check_selection(n, k)?;
    let (n, k) = (i128::from(n), i128::from(k));
    match repetition {
        Repetition::Without => binomial(n, k, "combinations"),
        Repetition::With if n == 0 => Ok(1.0),
        Repetition::With => binomial(n + k - 1, k, "combinations"),
    }
}

/// Central binomial coefficient `C(2n, n) = (2n)! / (n!)²`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`;
/// [`Error::Overflow`](comb_core::Error::Overflow) if the result is not
/// finite (`n > 514`).
pub fn central_binomial_coefficient(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for central binomial coefficient, got {n}");
    let n = i128::from(n);
    binomial(2 * n, n, "central_binomial_coefficient")
}
