//! # comb-core
//!
//! Core types and error definitions for the combinatorics workspace.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the numeric type aliases, the error enum, and the
//! `require!` / `ensure_finite!` / `fail!` validation macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `require!` / `ensure_finite!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for every result.
pub type Real = f64;

/// Signed integer type for counts such as `n` and `k`.
///
/// Signed so that a negative argument reaches validation and is reported as
/// a domain error instead of being unrepresentable.
pub type Integer = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
