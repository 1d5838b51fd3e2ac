//! Record and error types.
//!
//! This module provides:
//! - `error`: Structured error type for generator operations
//! - `person`: The `Person` record used by the demonstration workflows
//!
//! # Re-exports
//!
//! - [`ShuffleSortError`], [`Result`] from `error`
//! - [`Person`] from `person`

pub mod error;
pub mod person;

pub use error::{Result, ShuffleSortError};
pub use person::Person;
