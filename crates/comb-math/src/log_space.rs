//! Natural-log counterparts of the factorial-based counts.
//!
//! These share the domain rules of their linear-space siblings but work with
//! `ln n!` (via `statrs`), so they stay finite far beyond `n = 170` and never
//! report [`Error::Overflow`](comb_core::Error::Overflow). Ratios are expanded
//! through Stirling's formula instead of subtracting log-factorials, which
//! keeps them accurate for huge `n` with small `k`.

use comb_core::{fail, require, Integer, Real, Result};
use statrs::function::factorial::ln_factorial as statrs_ln_factorial;

use crate::counting::{check_selection, Repetition};

const HALF_LN_TWO_PI: Real = 0.918_938_533_204_672_8;

/// `ln x! - (x ln x - x + ½ ln 2πx)`, the Stirling remainder, for `x >= 1`.
fn stirling_remainder(x: u64) -> Real {
    let xf = x as Real;
    if x < 16 {
        statrs_ln_factorial(x) - (xf * xf.ln() - xf + 0.5 * xf.ln() + HALF_LN_TWO_PI)
    } else {
        let x2 = xf * xf;
        (1.0 / 12.0 - (1.0 / 360.0 - 1.0 / (1260.0 * x2)) / x2) / xf
    }
}

/// `ln(n! / (n - k)!)` for `k <= n`.
///
/// Expanded through Stirling's formula so the two large log-factorials never
/// get subtracted; with `r = n - k`,
///
/// ```text
/// (r + ½) ln(1 + k/r) + k ln n - k + R(n) - R(r)
/// ```
///
/// where `R` is [`stirling_remainder`].
fn ln_falling(n: u64, k: u64) -> Real {
    if k == 0 {
        return 0.0;
    }
    let rest = n - k;
    if rest == 0 {
        return statrs_ln_factorial(n);
    }
    let (rest_f, k_f) = (rest as Real, k as Real);
    (rest_f + 0.5) * (k_f / rest_f).ln_1p() + k_f * (n as Real).ln() - k_f
        + (stirling_remainder(n) - stirling_remainder(rest))
}

/// `ln C(m, k)` for `k <= m`.
fn ln_binomial(m: u64, k: u64) -> Real {
    let j = k.min(m - k);
    ln_falling(m, j) - statrs_ln_factorial(j)
}

/// `ln(n!)`.
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`.
pub fn ln_factorial(n: Integer) -> Result<Real> {
    require!(n >= 0, "n", "must be non-negative for factorial, got {n}");
    Ok(statrs_ln_factorial(n as u64))
}

/// `ln P(n)` for `k = None`, `ln P(n, k)` otherwise. See
/// [`permutations`](crate::counting::permutations).
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`, `k < 0` or
/// `k > n`.
pub fn ln_permutations(n: Integer, k: Option<Integer>) -> Result<Real> {
    let Some(k) = k else {
        return ln_factorial(n);
    };
    check_selection(n, k)?;
    Ok(ln_falling(n as u64, k as u64))
}

/// Log of [`combinations`](crate::counting::combinations).
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if `n < 0`, `k < 0` or
/// `k > n`.
pub fn ln_combinations(n: Integer, k: Integer, repetition: Repetition) -> Result<Real> {
    check_selection(n, k)?;
    Ok(match repetition {
        Repetition::Without => ln_binomial(n as u64, k as u64),
        Repetition::With if n == 0 => 0.0,
        // n + k - 1 cannot overflow u64 for non-negative i64 inputs.
        Repetition::With => ln_binomial(n as u64 + k as u64 - 1, k as u64),
    })
}

/// Log of [`multinomial`](crate::numbers::multinomial).
///
/// # Errors
/// [`Error::Domain`](comb_core::Error::Domain) if any group size is
/// negative.
pub fn ln_multinomial(groups: &[Integer]) -> Result<Real> {
    for (index, &size) in groups.iter().enumerate() {
        require!(
            size >= 0,
            "groups",
            "sizes must be non-negative, got {size} at index {index}"
        );
    }
    let mut total: u64 = 0;
    let mut sum: Real = 0.0;
    for &size in groups {
        let Some(next) = total.checked_add(size as u64) else {
            fail!("groups", "total size exceeds {}", u64::MAX);
        };
        total = next;
        sum += ln_binomial(total, size as u64);
    }
    Ok(sum)
}
