//! Comparison sorting.
//!
//! This module provides:
//! - `bubble`: Stable bubble sort with caller-supplied comparator
//! - `compare`: Ready-made comparators and comparator combinators
//!
//! # Re-exports
//!
//! - [`bubble_sort`], [`bubble_sort_in_place`], [`bubble_sorted`],
//!   [`is_sorted_by`], [`SortStats`] from `bubble`

pub mod bubble;
pub mod compare;

pub use bubble::{bubble_sort, bubble_sort_in_place, bubble_sorted, is_sorted_by, SortStats};
