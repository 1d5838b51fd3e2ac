//! Fisher-Yates (Knuth) shuffle.
//!
//! For `i` from `len - 1` down to `1`, draw `j` uniformly from `[0, i]` and
//! swap positions `i` and `j`. With a uniform source every one of the `n!`
//! orderings is equally likely, and a given source sequence always yields
//! the same permutation.
//!
//! A slice of length `n` consumes exactly `n - 1` range draws (none for
//! `n <= 1`).
//!
//! Three entry points cover the ownership choices:
//! - [`shuffle_in_place`] permutes a caller-owned slice
//! - [`shuffle`] consumes a `Vec` and returns it permuted
//! - [`shuffled`] clones the input and leaves it untouched
//!
//! [`shuffle`] and [`shuffled`] take the source by value. Pass `&mut rng`
//! to keep using the advanced source afterwards, or an owned source such
//! as a [`RandomGenerator`](crate::RandomGenerator) when it is not needed again.

use crate::rng::RandomSource;
use crate::types::Result;

/// Shuffles `items` in place.
///
/// # Errors
///
/// Only propagates errors from `rng`; a conforming source never fails for
/// the non-empty ranges requested here.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{shuffle_in_place, SimpleRandom};
///
/// let mut items = [1, 2, 3, 4, 5];
/// shuffle_in_place(&mut items, &mut SimpleRandom::new(42)).unwrap();
///
/// let mut sorted = items;
/// sorted.sort();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Consumes `items` and returns them in shuffled order.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{shuffle, SimpleRandom};
///
/// let mut rng = SimpleRandom::new(42);
/// let shuffled = shuffle(vec![5, 2, 8, 1, 9, 3, 7, 4, 6, 10], &mut rng).unwrap();
/// assert_eq!(shuffled, vec![2, 6, 4, 10, 5, 7, 9, 1, 8, 3]);
/// ```
pub fn shuffle<T, R>(mut items: Vec<T>, mut rng: R) -> Result<Vec<T>>
where
    R: RandomSource,
{
    shuffle_in_place(&mut items, &mut rng)?;
    Ok(items)
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T, R>(items: &[T], rng: R) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource,
{
    shuffle(items.to_vec(), rng)
}
