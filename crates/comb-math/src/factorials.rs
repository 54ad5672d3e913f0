//! The factorial family: n!, n!!, rising and falling factorials, and the
//! subfactorial (derangement count).
//!
//! All loops are iterative and stop as soon as the running product stops
//! being finite, so the cost of an overflowing call is bounded by the
//! overflow point rather than by `n`.

use comb_core::{ensure_finite, require, Integer, Real, Result};

/// Factorial `n! = 1 · 2 · … · n`, with `0! = 1`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`;
/// [`Error::Overflow`](comb_core::Error::Overflow) if `n! > f64::MAX`
/// (that is, `n > 170`).
///
/// Results are exact only up to `n = 22`; beyond that the product is the
/// nearest representable `f64`.
pub fn factorial(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for factorial, got {n}");
    let mut product: Real = 1.0;
    for i in 2..=n {
        product = ensure_finite!(product * i as Real, "factorial");
    }
    Ok(product)
}

/// Double factorial (semifactorial) `n!!`.
///
/// The product of the integers from 1 to `n` sharing the parity of `n`:
///
/// ```text
/// n even:  n!! = n (n - 2) ··· 4 · 2
/// n odd:   n!! = n (n - 2) ··· 3 · 1
/// ```
///
/// with `0!! = 1`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`;
/// [`Error::Overflow`](comb_core::Error::Overflow) if the product is not
/// finite.
pub fn double_factorial(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for double factorial, got {n}");
    if n == 0 {
        return Ok(1.0);
    }
    // Seed with the smallest factor of the matching parity.
    let mut product: Real = if n % 2 == 0 { 2.0 } else { 1.0 };
    let mut i = n;
    while i >= 3 {
        product = ensure_finite!(product * i as Real, "double_factorial");
        i -= 2;
    }
    Ok(product)
}

/// Rising factorial (Pochhammer symbol) `x⁽ⁿ⁾ = x (x + 1) ··· (x + n - 1)`.
///
/// Returns 1 for `n = 0` regardless of `x`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0` or `x` is not
/// finite; [`Error::Overflow`](comb_core::Error::Overflow) if the product is
/// not finite.
pub fn rising_factorial(x: Real, n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for rising factorial, got {n}");
    require!(x.is_finite(), "x", "must be finite for rising factorial, got {x}");
    let mut product: Real = 1.0;
    for i in 0..n {
        product = ensure_finite!(product * (x + i as Real), "rising_factorial");
        if product == 0.0 {
            break;
        }
    }
    Ok(product)
}

/// Falling factorial `x₍ₙ₎ = x (x - 1) ··· (x - n + 1)`.
///
/// Returns 1 for `n = 0`. When `x` is a non-negative integer and `n > x` one
/// of the factors is zero and the result is exactly `0.0`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0` or `x` is not
/// finite; [`Error::Overflow`](comb_core::Error::Overflow) if the product is
/// not finite.
pub fn falling_factorial(x: Real, n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for falling factorial, got {n}");
    require!(x.is_finite(), "x", "must be finite for falling factorial, got {x}");
    if n == 0 {
        return Ok(1.0);
    }
    if x >= 0.0 && x.fract() == 0.0 && (n as Real) > x {
        return Ok(0.0);
    }
    let mut product: Real = 1.0;
    for i in 0..n {
        product = ensure_finite!(product * (x - i as Real), "falling_factorial");
        if product == 0.0 {
            break;
        }
    }
    Ok(product)
}

/// Subfactorial `!n`, the number of derangements of `n` elements:
///
/// ```text
///            n   (-1)ⁱ
/// !n = n! ·  Σ   -----
///           i=0   i!
/// ```
///
/// The alternating sum is accumulated term by term and the result rounded
/// to the nearest integer, which removes the cancellation residue.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`;
/// [`Error::Overflow`](comb_core::Error::Overflow) if `n!` overflows.
pub fn subfactorial(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for subfactorial, got {n}");
    let n_factorial = factorial(n)?;
    let mut sigma: Real = 0.0;
    let mut sign: Real = 1.0;
    for i in 0..=n {
        sigma += sign / factorial(i)?;
        sign = -sign;
    }
    Ok((n_factorial * sigma).round())
}
