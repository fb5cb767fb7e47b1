//! Error types for structured error handling.
//!
//! This module provides [`RngError`], the single error type returned by
//! bounded draws, algorithm parsing and entropy seeding.
//!
//! Seeding itself never fails: a zero seed is substituted and an empty
//! hash input maps to 0. Out-of-range bias parameters are repaired in
//! place rather than reported.

use thiserror::Error;

/// Categorised random number generation errors.
///
/// # Variants
/// - `InvalidBound`: bounded draw requested with a non-positive bound
/// - `InvalidRange`: range draw requested with `upper <= lower`
/// - `UnknownAlgorithm`: algorithm name could not be parsed
/// - `EntropyUnavailable`: the operating system entropy source failed
///
/// # Examples
/// ```
/// use prng_core::types::RngError;
///
/// let err = RngError::InvalidBound { bound: 0 };
/// assert_eq!(format!("{}", err), "Invalid bound 0: must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// Bounded draw called with `bound <= 0`.
    #[error("Invalid bound {bound}: must be positive")]
    InvalidBound {
        /// The rejected bound.
        bound: i64,
    },

    /// Range draw called with `upper <= lower`.
    #[error("Invalid range [{lower}, {upper}): upper bound must be greater than lower bound")]
    InvalidRange {
        /// Inclusive lower bound.
        lower: i64,
        /// Exclusive upper bound.
        upper: i64,
    },

    /// Algorithm name not recognised.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Operating system entropy could not be read.
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),
}
