//! The random-source trait consumed by the shuffle.

use crate::types::Result;

/// A stateful source of uniformly distributed integers.
///
/// Implementors advance their internal state on every successful draw, so
/// calling [`next_in_range`](Self::next_in_range) twice generally yields
/// different values.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{RandomSource, SimpleRandom};
///
/// fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> i64 {
///     rng.next_in_range(1, 7).unwrap()
/// }
///
/// let mut rng = SimpleRandom::new(7);
/// let dynamic: &mut dyn RandomSource = &mut rng;
/// assert!((1..7).contains(&roll(dynamic)));
/// ```
pub trait RandomSource {
    /// Returns `v` with `low <= v < high`.
    ///
    /// # Errors
    ///
    /// [`ShuffleSortError::InvalidRange`](crate::ShuffleSortError::InvalidRange)
    /// when `low >= high`. State is left untouched in that case.
    fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64>;

    /// Returns an index in `[0, bound)`.
    ///
    /// Performs exactly one [`next_in_range`](Self::next_in_range) call.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `bound == 0`.
    #[inline]
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        // Slice lengths never exceed isize::MAX, so this only saturates for
        // bounds no slice can have.
        let high = i64::try_from(bound).unwrap_or(i64::MAX);
        let value = self.next_in_range(0, high)?;
        Ok(value as usize)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64> {
        (**self).next_in_range(low, high)
    }
}
