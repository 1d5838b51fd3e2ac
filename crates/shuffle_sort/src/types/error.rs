//! Error types for structured error handling.
//!
//! Shuffling and sorting accept any sequence, so the only failure mode in
//! this crate is a malformed range request to a generator.

use thiserror::Error;

/// Errors raised by random sources.
///
/// # Variants
/// - `InvalidRange`: `low` is not strictly below `high`
///
/// # Examples
/// ```
/// use shuffle_sort::ShuffleSortError;
///
/// let err = ShuffleSortError::InvalidRange { low: 5, high: 5 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid range [5, 5): low bound must be less than high bound"
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleSortError {
    /// Requested half-open range is empty.
    #[error("Invalid range [{low}, {high}): low bound must be less than high bound")]
    InvalidRange {
        /// Inclusive lower bound as requested
        low: i64,
        /// Exclusive upper bound as requested
        high: i64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShuffleSortError>;
