//! Linear congruential generator with fixed, portable constants.
//!
//! This module provides [`SimpleRandom`], the reproducible generator used
//! by the shuffle and the demonstration workflows.

use rand::{RngCore, SeedableRng};

use super::source::RandomSource;
use crate::types::{Result, ShuffleSortError};

/// LCG multiplier (Knuth, MMIX).
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment (Knuth, MMIX).
pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Largest span served by a single draw.
const SINGLE_DRAW_SPAN: u64 = 1 << 32;

/// Deterministic 64-bit linear congruential generator.
///
/// State advances as `state = state * MULTIPLIER + INCREMENT (mod 2^64)`.
/// Each step is one *draw*; its output is the high 32 bits of the new
/// state, which avoids the short periods of the low LCG bits.
///
/// # Seeding
///
/// Every `i64` is a valid seed. The initial state is the seed's
/// two's-complement bit pattern, so `0` and negative seeds are
/// well-defined and distinct from each other.
///
/// # Range Reduction
///
/// [`next_in_range`](RandomSource::next_in_range) maps a draw onto the
/// requested span with a multiply-shift rather than a modulus, so the
/// well-mixed high bits pick the result. Spans above `2^32` consume two
/// draws. Bias is bounded by `span / 2^32` and is not corrected.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{RandomSource, SimpleRandom};
///
/// let mut rng1 = SimpleRandom::new(12345);
/// let mut rng2 = SimpleRandom::new(12345);
///
/// // Same seed produces identical sequences
/// for _ in 0..10 {
///     assert_eq!(
///         rng1.next_in_range(0, 100).unwrap(),
///         rng2.next_in_range(0, 100).unwrap()
///     );
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRandom {
    /// Current LCG state.
    state: u64,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: i64,
}

impl SimpleRandom {
    /// Creates a generator initialised with the given seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shuffle_sort::SimpleRandom;
    ///
    /// let mut rng = SimpleRandom::new(42);
    /// assert_eq!(rng.next_u32(), 2_440_530_669);
    /// ```
    #[inline]
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed as u64,
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Performs one draw and returns its 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        (self.state >> 32) as u32
    }

    /// Performs two draws and concatenates them, first draw high.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Returns a uniform value in [0, 1) with 53 bits of precision.
    ///
    /// Consumes two draws.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RandomSource for SimpleRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64> {
        if low >= high {
            return Err(ShuffleSortError::InvalidRange { low, high });
        }

        // low < high, so the difference always fits in u64
        let span = high.wrapping_sub(low) as u64;
        let offset = if span <= SINGLE_DRAW_SPAN {
            (u64::from(self.next_u32()) * span) >> 32
        } else {
            ((u128::from(self.next_u64()) * u128::from(span)) >> 64) as u64
        };

        Ok(low.wrapping_add(offset as i64))
    }
}

impl RngCore for SimpleRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        SimpleRandom::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        SimpleRandom::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&SimpleRandom::next_u32(self).to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = SimpleRandom::next_u32(self).to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SimpleRandom {
    type Seed = [u8; 8];

    /// Interprets the bytes as a little-endian `i64` seed.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    /// Uses the value directly as the state instead of rand's PCG expansion,
    /// so `seed_from_u64(n)` matches `SimpleRandom::new(n as i64)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}
