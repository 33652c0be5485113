//! Error types for Temperley–Lieb computations.
//!
//! Errors here are first-class: most of them represent algebraically
//! undefined operations rather than bugs. Composing elements of TL_m and
//! TL_n with m ≠ n is not a crash — it is an operation that simply does
//! not exist, and the error value says so.
//!
//! The one exception is [`TlError::InternalFault`], which reports a broken
//! invariant inside the composition algorithm itself. It is never expected
//! to surface on validated inputs and must not be silently recovered.

use thiserror::Error;

/// Errors that can occur while building or combining diagrams.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TlError {
    /// Malformed construction: empty lists, ill-formed pair lists,
    /// inconsistent strand counts across the terms of a sum.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Generator index outside the valid range for the given algebra.
    /// `U_i` exists in TL_n only for `0 <= i <= n - 2`.
    #[error("generator index {index} out of range for TL_{n} (valid: 0..=n-2)")]
    InvalidIndex { index: usize, n: usize },

    /// Compose/add/tensor attempted across algebras of different size.
    /// The categorical equivalent of `cod(f) ≠ dom(g)`.
    #[error("dimension mismatch: expected n = {expected}, got n = {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// An invariant of the composition algorithm was violated. This is a
    /// defect in the library, not a user error.
    #[error("internal consistency fault: {reason}")]
    InternalFault { reason: String },
}
