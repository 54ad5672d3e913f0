//! Derived counting numbers: Catalan, Lah and multinomial coefficients.

use comb_core::{ensure_finite, require, Integer, Real, Result};

use crate::counting::{binomial, combinations, permutations, Repetition};

/// The `n`-th Catalan number
///
/// ```text
///         1    (2n)
/// Cₙ =  -----  (  )
///       n + 1  (n )
/// ```
///
/// using real (non-truncating) division by `n + 1`.
///
/// Evaluated through the ratio `Cᵢ₊₁ / Cᵢ = 2(2i + 1) / (i + 2)`, so the
/// running value never exceeds the result and stays exact while it fits the
/// `f64` mantissa. `C(2n, n)` itself is never formed.
///
/// Counts balanced bracket sequences of length `2n`, binary tree shapes with
/// `n` internal nodes, triangulations of an `(n + 2)`-gon, ...
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`;
/// [`Error::Overflow`](comb_core::Error::Overflow) if the result is not
/// finite (`n > 519`).
pub fn catalan_number(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for Catalan numbers, got {n}");
    let mut c: Real = 1.0;
    for i in 0..n {
        let numerator = 2.0 * (2.0 * i as Real + 1.0);
        let denominator = i as Real + 2.0;
        let scaled = c * numerator;
        // Divide first only once the exact product no longer fits.
        let next = if scaled.is_finite() {
            scaled / denominator
        } else {
            c / denominator * numerator
        };
        c = ensure_finite!(next, "catalan_number");
    }
    Ok(c.round())
}

/// Lah number (unsigned, of the first kind)
///
/// ```text
///           (n - 1)  n!
/// L(n, k) = (     )  --
///           (k - 1)  k!
/// ```
///
/// the coefficients expressing rising factorials in terms of falling ones.
/// The ratio `n!/k!` is taken as the falling product `P(n, n - k)`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 1`, `k < 1` or
/// `n < k`; [`Error::Overflow`](comb_core::Error::Overflow) if the result is
/// not finite.
pub fn lah_number(n: Integer, k: Integer) -> Result<Real> {
    require!(n >= 1, "n", "must be at least 1 for Lah numbers, got {n}");
    require!(k >= 1, "k", "must be at least 1 for Lah numbers, got {k}");
    require!(n >= k, "n", "must be at least k ({k}) for Lah numbers, got {n}");
    let choose = combinations(n - 1, k - 1, Repetition::Without)?;
    let ratio = permutations(n, Some(n - k))?;
    Ok(ensure_finite!(choose * ratio, "lah_number"))
}

/// Multinomial coefficient
///
/// ```text
///  (k₁ + k₂ + ··· + kₘ)!
///  ---------------------
///     k₁! k₂! ··· kₘ!
/// ```
///
/// the number of ways to split `k₁ + ··· + kₘ` items into `m` labelled groups
/// of the given sizes. An empty slice gives 1.
///
/// Evaluated as the telescoping product `∏ C(k₁ + ··· + kⱼ, kⱼ)`, which is
/// the same value without forming the numerator factorial.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if any group size is
/// negative; [`Error::Overflow`](comb_core::Error::Overflow) if the result is
/// not finite.
pub fn multinomial(groups: &[Integer]) -> Result<Real> {
    for (index, &size) in groups.iter().enumerate() {
        require!(
            size >= 0,
            "groups",
            "sizes must be non-negative, got {size} at index {index}"
        );
    }
    let mut total: i128 = 0;
    let mut product: Real = 1.0;
    for &size in groups {
        total += i128::from(size);
        let factor = binomial(total, i128::from(size), "multinomial")?;
        product = ensure_finite!(product * factor, "multinomial");
    }
    Ok(product)
}
