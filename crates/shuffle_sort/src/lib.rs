//! # shuffle_sort: Seeded Shuffling and Stable Sorting
//!
//! ## Role
//!
//! shuffle_sort is the foundation crate of the workspace, providing:
//! - A deterministic seeded generator (`rng::SimpleRandom`) and an owning
//!   handle for passing it by value (`rng::RandomGenerator`)
//! - The Fisher-Yates shuffle (`shuffle`)
//! - A stable comparison-based bubble sort (`sort`)
//! - Ready-made comparators and the `Person` record (`sort::compare`, `types::person`)
//! - Error types: `ShuffleSortError` (`types::error`)
//!
//! ## Reproducibility
//!
//! `SimpleRandom` is a 64-bit linear congruential generator with fixed
//! constants, so a given seed yields the same shuffle on every platform and
//! every run. The `RandomSource` trait is the only seam the shuffle depends
//! on; `StdRandom` plugs `rand::rngs::StdRng` into it when bit-for-bit
//! reproducibility is not required.
//!
//! ## Usage Examples
//!
//! ```rust
//! use shuffle_sort::{bubble_sort, compare_ints, shuffle, SimpleRandom};
//!
//! let mut rng = SimpleRandom::new(42);
//! let numbers = vec![5, 2, 8, 1, 9, 3, 7, 4, 6, 10];
//!
//! let shuffled = shuffle(numbers, &mut rng).unwrap();
//! assert_eq!(shuffled, vec![2, 6, 4, 10, 5, 7, 9, 1, 8, 3]);
//!
//! let sorted = bubble_sort(shuffled, compare_ints);
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Person` and `SortStats`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod shuffle;
pub mod sort;
pub mod types;

// Flat re-exports for the common call path
pub use rng::{RandomGenerator, RandomSource, SimpleRandom, StdRandom};
pub use shuffle::{shuffle, shuffle_in_place, shuffled};
pub use sort::compare::{
    by_key, compare_ints, compare_persons_by_age, compare_persons_by_name, reversed,
};
pub use sort::{bubble_sort, bubble_sort_in_place, bubble_sorted, is_sorted_by, SortStats};
pub use types::{Person, Result, ShuffleSortError};
