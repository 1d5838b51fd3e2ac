//! Owning generator handle.

use super::lcg::SimpleRandom;
use super::source::RandomSource;
use crate::types::Result;

/// Owns a [`RandomSource`] and forwards draws to it.
///
/// Lets callers hand a generator to [`shuffle`](crate::shuffle) by value
/// when they have no further use for its state. Pass `&mut` instead to
/// keep drawing from the same sequence afterwards.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{shuffle, RandomGenerator, SimpleRandom};
///
/// let rng = SimpleRandom::new(42);
/// let shuffled = shuffle(vec![5, 2, 8], RandomGenerator::new(rng.clone())).unwrap();
/// assert_eq!(shuffled.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomGenerator<R: RandomSource = SimpleRandom> {
    source: R,
}

impl<R: RandomSource> RandomGenerator<R> {
    /// Wraps `source`.
    #[inline]
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Borrows the wrapped source.
    #[inline]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Unwraps the source, keeping whatever state it has reached.
    #[inline]
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: RandomSource> RandomSource for RandomGenerator<R> {
    #[inline]
    fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64> {
        self.source.next_in_range(low, high)
    }
}
