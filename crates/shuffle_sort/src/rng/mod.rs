//! # Random Number Generation
//!
//! Seeded random sources for the shuffle.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every source is seeded explicitly; there is no global state
//! - **Portability**: `SimpleRandom` fixes its algorithm and constants, so a
//!   seed maps to the same sequence everywhere
//! - **Static dispatch**: The shuffle is generic over [`RandomSource`];
//!   `&mut dyn RandomSource` also works where a trait object is wanted
//!
//! ## Module Structure
//!
//! - [`source`]: The `RandomSource` trait consumed by the shuffle
//! - [`generator`]: `RandomGenerator`, an owning handle passed by value
//! - [`lcg`]: `SimpleRandom`, the 64-bit linear congruential generator
//! - [`std_random`]: `StdRandom`, a `RandomSource` over `rand::rngs::StdRng`
//!
//! ## Usage Example
//!
//! ```rust
//! use shuffle_sort::rng::{RandomSource, SimpleRandom};
//!
//! let mut rng = SimpleRandom::new(42);
//! let roll = rng.next_in_range(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! // Empty ranges are rejected
//! assert!(rng.next_in_range(3, 3).is_err());
//! ```

pub mod generator;
pub mod lcg;
pub mod source;
pub mod std_random;

pub use generator::RandomGenerator;
pub use lcg::SimpleRandom;
pub use source::RandomSource;
pub use std_random::StdRandom;
