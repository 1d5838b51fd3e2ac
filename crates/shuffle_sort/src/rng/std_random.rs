//! `RandomSource` backed by the `rand` crate's standard generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::RandomSource;
use crate::types::{Result, ShuffleSortError};

/// Seeded [`RandomSource`] over [`StdRng`].
///
/// Sequences are reproducible for a given seed and `rand` release, but
/// `StdRng`'s algorithm may change between `rand` versions. Use
/// [`SimpleRandom`](crate::SimpleRandom) when output must stay stable
/// across toolchains and languages.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{shuffle, StdRandom};
///
/// let mut rng = StdRandom::from_seed(42);
/// let shuffled = shuffle(vec![1, 2, 3, 4], &mut rng).unwrap();
/// assert_eq!(shuffled.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct StdRandom {
    inner: StdRng,
    seed: u64,
}

impl StdRandom {
    /// Creates a source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for StdRandom {
    #[inline]
    fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64> {
        if low >= high {
            return Err(ShuffleSortError::InvalidRange { low, high });
        }
        Ok(self.inner.gen_range(low..high))
    }
}
